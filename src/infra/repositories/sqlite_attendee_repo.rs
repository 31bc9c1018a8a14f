use crate::domain::{models::attendee::Attendee, ports::AttendeeRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{Sqlite, SqlitePool, Transaction};

const INSERT_ATTENDEE: &str =
    "INSERT INTO attendees (ticket_id, name, email, phone, event, ticket_type, registered_at)
     VALUES (?, ?, ?, ?, ?, ?, ?)";

pub struct SqliteAttendeeRepo {
    pool: SqlitePool,
}

impl SqliteAttendeeRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn insert(tx: &mut Transaction<'_, Sqlite>, attendee: &Attendee) -> Result<(), AppError> {
        sqlx::query(INSERT_ATTENDEE)
            .bind(&attendee.ticket_id).bind(&attendee.name).bind(&attendee.email).bind(&attendee.phone)
            .bind(&attendee.event).bind(attendee.ticket_type).bind(attendee.registered_at)
            .execute(&mut **tx).await.map_err(AppError::Database)?;
        Ok(())
    }
}

#[async_trait]
impl AttendeeRepository for SqliteAttendeeRepo {
    async fn append(&self, attendee: &Attendee) -> Result<Attendee, AppError> {
        self.append_all(std::slice::from_ref(attendee)).await?;
        Ok(attendee.clone())
    }
    async fn append_all(&self, attendees: &[Attendee]) -> Result<Vec<Attendee>, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;
        for attendee in attendees {
            Self::insert(&mut tx, attendee).await?;
        }
        tx.commit().await.map_err(AppError::Database)?;
        Ok(attendees.to_vec())
    }
    async fn find_by_ticket_id(&self, ticket_id: &str) -> Result<Option<Attendee>, AppError> {
        sqlx::query_as::<_, Attendee>("SELECT * FROM attendees WHERE ticket_id = ? ORDER BY rowid ASC LIMIT 1").bind(ticket_id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn list(&self) -> Result<Vec<Attendee>, AppError> {
        sqlx::query_as::<_, Attendee>("SELECT * FROM attendees ORDER BY rowid ASC").fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_by_event(&self, event: &str) -> Result<Vec<Attendee>, AppError> {
        sqlx::query_as::<_, Attendee>("SELECT * FROM attendees WHERE event = ? ORDER BY rowid ASC").bind(event).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
}
