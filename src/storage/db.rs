use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Result;

pub type DbPool = Pool<SqliteConnectionManager>;
pub type DbConnection = PooledConnection<SqliteConnectionManager>;

/// Create a new database connection pool
///
/// Initializes a connection pool with up to 10 connections and ensures the
/// schema exists.
///
/// # Arguments
///
/// * `database_path` - Path to SQLite database file
///
/// # Returns
///
/// Returns a `DbPool` on success or an `r2d2::Error` if pool creation fails.
///
/// # Example
///
/// ```no_run
/// use visibot::storage;
///
/// let pool = storage::create_pool("bot.db")?;
/// # Ok::<(), r2d2::Error>(())
/// ```
pub fn create_pool(database_path: &str) -> Result<DbPool, r2d2::Error> {
    let manager = SqliteConnectionManager::file(database_path);
    let pool = Pool::builder()
        .max_size(10) // Maximum 10 connections in the pool
        .build(manager)?;

    // Ensure schema exists on first connection
    let conn = pool.get()?;
    if let Err(e) = init_schema(&conn) {
        log::warn!("Failed to initialize schema: {}", e);
    }

    Ok(pool)
}

/// Get a connection from the pool
///
/// Retrieves a connection from the connection pool. The connection is
/// automatically returned to the pool when dropped.
pub fn get_connection(pool: &DbPool) -> Result<DbConnection, r2d2::Error> {
    pool.get()
}

/// Creates both tables if they do not exist yet. Safe to run on every startup.
///
/// `orders` is reserved schema for future order tracking; no current code path
/// reads or writes it. `orders.user_id` is a logical join key to
/// `users.user_id`, not an enforced foreign key.
pub fn init_schema(conn: &rusqlite::Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS users (user_id INTEGER PRIMARY KEY, balance REAL DEFAULT 0.0)",
        [],
    )?;
    conn.execute(
        "CREATE TABLE IF NOT EXISTS orders (id INTEGER PRIMARY KEY AUTOINCREMENT, user_id INTEGER, service TEXT, amount INTEGER, status TEXT)",
        [],
    )?;
    Ok(())
}

/// Gets the stored wallet balance for a user.
///
/// # Arguments
///
/// * `conn` - Database connection
/// * `user_id` - Telegram user ID
///
/// # Returns
///
/// Returns `Ok(Some(balance))` when the user has a row, `Ok(None)` when they
/// do not, or a database error. Never inserts: unseen users stay absent until
/// an explicit write path runs.
pub fn get_user_balance(conn: &DbConnection, user_id: i64) -> Result<Option<f64>> {
    let mut stmt = conn.prepare("SELECT balance FROM users WHERE user_id = ?")?;
    let mut rows = stmt.query(&[&user_id as &dyn rusqlite::ToSql])?;

    if let Some(row) = rows.next()? {
        Ok(Some(row.get(0)?))
    } else {
        Ok(None)
    }
}

/// Sets the wallet balance for a user, creating the row if needed.
///
/// This is the write path for future purchase logic; no handler calls it
/// today.
pub fn set_user_balance(conn: &DbConnection, user_id: i64, balance: f64) -> Result<()> {
    conn.execute(
        "INSERT INTO users (user_id, balance) VALUES (?1, ?2)
         ON CONFLICT(user_id) DO UPDATE SET balance = excluded.balance",
        &[&user_id as &dyn rusqlite::ToSql, &balance as &dyn rusqlite::ToSql],
    )?;
    Ok(())
}
