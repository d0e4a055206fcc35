use async_trait::async_trait;
use models::result::{self, NewResult};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, TransactionTrait};

use crate::errors::ServiceError;

#[async_trait]
pub trait ResultRepository: Send + Sync {
    async fn exists(&self, username: &str) -> Result<bool, ServiceError>;
    async fn insert(&self, new: NewResult) -> Result<result::Model, ServiceError>;
    /// Rows for `username`, newest first; equal dates fall back to newest id.
    async fn list_by_username(&self, username: &str) -> Result<Vec<result::Model>, ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmResultRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmResultRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl ResultRepository for SeaOrmResultRepository {
    async fn exists(&self, username: &str) -> Result<bool, ServiceError> {
        let found = result::Entity::find()
            .filter(result::Column::Username.eq(username))
            .one(&self.db)
            .await?;
        Ok(found.is_some())
    }

    async fn insert(&self, new: NewResult) -> Result<result::Model, ServiceError> {
        // Dropping an uncommitted transaction rolls it back.
        let txn = self.db.begin().await?;
        let created = result::create(&txn, new).await?;
        txn.commit().await?;
        Ok(created)
    }

    async fn list_by_username(&self, username: &str) -> Result<Vec<result::Model>, ServiceError> {
        let rows = result::Entity::find()
            .filter(result::Column::Username.eq(username))
            .order_by_desc(result::Column::Date)
            .order_by_desc(result::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use chrono::{TimeZone, Utc};
    use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, Set};

    async fn insert_at(db: &DatabaseConnection, username: &str, profile: &str, date: chrono::DateTime<Utc>) -> result::Model {
        result::ActiveModel {
            id: NotSet,
            username: Set(username.into()),
            scores: Set("{}".into()),
            profile: Set(profile.into()),
            energy: Set(0),
            math: Set(0),
            tech: Set(0),
            career: Set(0),
            date: Set(date),
        }
        .insert(db)
        .await
        .expect("insert")
    }

    #[tokio::test]
    async fn list_orders_by_date_then_id_desc() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let repo = SeaOrmResultRepository::new(db.clone());

        let early = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
        let a = insert_at(&db, "dana", "a", late).await;
        let b = insert_at(&db, "dana", "b", early).await;
        let c = insert_at(&db, "dana", "c", late).await;
        insert_at(&db, "someone-else", "x", late).await;

        let ids: Vec<i32> = repo.list_by_username("dana").await?.into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![c.id, a.id, b.id]);
        Ok(())
    }

    #[tokio::test]
    async fn exists_matches_exact_username_only() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let repo = SeaOrmResultRepository::new(db.clone());
        insert_at(&db, "Erin", "p", Utc::now()).await;

        assert!(repo.exists("Erin").await?);
        assert!(!repo.exists("erin").await?);
        assert!(!repo.exists("Eri").await?);
        Ok(())
    }
}
