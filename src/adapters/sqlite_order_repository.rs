//! SQLite implementation of OrderRepository.
//!
//! Every operation opens its own connection and closes it before returning,
//! whatever the outcome. Writes run inside a transaction so a failed
//! statement never leaves a partial row behind.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::Connection;
use tracing::{instrument, warn};

use crate::db;
use crate::domain::{Order, OrderId, OrderStatus};
use crate::ports::{OrderRepository, RepositoryError, RepositoryResult};

const SELECT_ORDER: &str = r#"
    SELECT order_id, project_type, client_email, description, quote, status,
        budget, timeline, payment_method, created_at, paid_at
    FROM orders
    WHERE order_id = ?
"#;

/// SQLite-backed order repository.
#[derive(Clone)]
pub struct SqliteOrderRepository {
    options: SqliteConnectOptions,
}

impl SqliteOrderRepository {
    pub fn new(options: SqliteConnectOptions) -> Self {
        Self { options }
    }

    async fn acquire(&self) -> RepositoryResult<SqliteConnection> {
        db::open(&self.options).await.map_err(RepositoryError::from)
    }

    async fn release(conn: SqliteConnection) {
        if let Err(e) = conn.close().await {
            warn!(error = %e, "Failed to close order store connection");
        }
    }
}

#[async_trait]
impl OrderRepository for SqliteOrderRepository {
    #[instrument(skip(self, order), fields(order_id = %order.order_id))]
    async fn create(&self, order: &Order) -> RepositoryResult<()> {
        let mut conn = self.acquire().await?;
        let result = insert_order(&mut conn, order).await;
        Self::release(conn).await;
        result
    }

    #[instrument(skip(self))]
    async fn get(&self, order_id: &OrderId) -> RepositoryResult<Order> {
        let mut conn = self.acquire().await?;
        let result = fetch_order(&mut conn, order_id).await;
        Self::release(conn).await;
        result
    }

    #[instrument(skip(self))]
    async fn mark_paid(&self, order_id: &OrderId, payment_method: &str) -> RepositoryResult<Order> {
        let mut conn = self.acquire().await?;
        let result = update_paid(&mut conn, order_id, payment_method).await;
        Self::release(conn).await;
        result
    }

    async fn ping(&self) -> RepositoryResult<()> {
        let mut conn = self.acquire().await?;
        let result = sqlx::query("SELECT 1")
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(RepositoryError::from);
        Self::release(conn).await;
        result
    }
}

async fn insert_order(conn: &mut SqliteConnection, order: &Order) -> RepositoryResult<()> {
    let mut tx = conn.begin().await?;

    sqlx::query(
        r#"
        INSERT INTO orders (
            order_id, project_type, client_email, description, quote, status,
            budget, timeline, payment_method, created_at, paid_at
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(order.order_id.as_str())
    .bind(&order.project_type)
    .bind(&order.client_email)
    .bind(&order.description)
    .bind(order.quote)
    .bind(order.status.as_str())
    .bind(&order.budget)
    .bind(&order.timeline)
    .bind(&order.payment_method)
    .bind(order.created_at)
    .bind(order.paid_at)
    .execute(&mut *tx)
    .await
    .map_err(|e| map_insert_error(e, &order.order_id))?;

    tx.commit().await?;
    Ok(())
}

async fn fetch_order(conn: &mut SqliteConnection, order_id: &OrderId) -> RepositoryResult<Order> {
    let row = sqlx::query_as::<_, OrderRow>(SELECT_ORDER)
        .bind(order_id.as_str())
        .fetch_optional(&mut *conn)
        .await?;

    row.ok_or_else(|| RepositoryError::NotFound(order_id.to_string()))?
        .into_domain()
}

async fn update_paid(
    conn: &mut SqliteConnection,
    order_id: &OrderId,
    payment_method: &str,
) -> RepositoryResult<Order> {
    let mut tx = conn.begin().await?;

    let updated = sqlx::query(
        r#"
        UPDATE orders
        SET status = ?, payment_method = ?, paid_at = ?
        WHERE order_id = ? AND status = ?
        "#,
    )
    .bind(OrderStatus::Paid.as_str())
    .bind(payment_method)
    .bind(Utc::now())
    .bind(order_id.as_str())
    .bind(OrderStatus::Pending.as_str())
    .execute(&mut *tx)
    .await?
    .rows_affected();

    // zero rows: either unknown id or already paid; tell them apart
    let order = fetch_order(&mut *tx, order_id).await?;
    if updated == 0 {
        return Err(RepositoryError::AlreadyPaid(order_id.to_string()));
    }

    tx.commit().await?;
    Ok(order)
}

fn map_insert_error(err: sqlx::Error, order_id: &OrderId) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db_err)
            if db_err.is_unique_violation()
                || db_err.message().starts_with("UNIQUE constraint failed") =>
        {
            RepositoryError::Duplicate(order_id.to_string())
        }
        _ => RepositoryError::Database(err),
    }
}

/// Internal row type for SQLx. Not exposed outside the adapter.
#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    order_id: String,
    project_type: String,
    client_email: String,
    description: String,
    quote: i64,
    status: String,
    budget: Option<String>,
    timeline: Option<String>,
    payment_method: Option<String>,
    created_at: DateTime<Utc>,
    paid_at: Option<DateTime<Utc>>,
}

impl OrderRow {
    fn into_domain(self) -> RepositoryResult<Order> {
        let status = self
            .status
            .parse::<OrderStatus>()
            .map_err(|e| RepositoryError::Database(sqlx::Error::Decode(Box::new(e))))?;

        Ok(Order {
            order_id: OrderId::from(self.order_id),
            project_type: self.project_type,
            client_email: self.client_email,
            description: self.description,
            budget: self.budget,
            timeline: self.timeline,
            quote: self.quote,
            status,
            payment_method: self.payment_method,
            created_at: self.created_at,
            paid_at: self.paid_at,
        })
    }
}
