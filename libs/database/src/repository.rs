//! Generic SeaORM data access shared by domain repositories.

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, PrimaryKeyTrait, QueryOrder, QuerySelect,
};
use std::marker::PhantomData;

type PrimaryKeyOf<E> = <<E as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType;

/// Thin wrapper over a connection pool, typed by entity.
///
/// Domain repositories hold one of these and reach for [`BaseRepository::db`]
/// when they need a query the helpers below don't cover.
///
/// ```ignore
/// pub struct PgProductRepository {
///     base: BaseRepository<entity::Entity>,
/// }
///
/// let model = self.base.find_by_id(42).await?;
/// ```
pub struct BaseRepository<E: EntityTrait> {
    db: DatabaseConnection,
    _entity: PhantomData<E>,
}

impl<E> BaseRepository<E>
where
    E: EntityTrait,
    E::Model: Sync,
{
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub async fn find_by_id<K>(&self, id: K) -> Result<Option<E::Model>, DbErr>
    where
        K: Into<PrimaryKeyOf<E>>,
    {
        E::find_by_id(id).one(&self.db).await
    }

    /// Insert a new row and return it as stored
    pub async fn insert<A>(&self, model: A) -> Result<E::Model, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        model.insert(&self.db).await
    }

    /// Delete by primary key. Returns the number of rows removed, 0 when absent.
    pub async fn delete_by_id<K>(&self, id: K) -> Result<u64, DbErr>
    where
        K: Into<PrimaryKeyOf<E>>,
    {
        let result = E::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        E::find().count(&self.db).await
    }

    /// One window of the table in ascending `order_by` order
    pub async fn fetch_page(
        &self,
        offset: u64,
        limit: u64,
        order_by: E::Column,
    ) -> Result<Vec<E::Model>, DbErr> {
        E::find()
            .order_by_asc(order_by)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
    }
}

impl<E: EntityTrait> Clone for BaseRepository<E> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            _entity: PhantomData,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    mod widget {
        use sea_orm::entity::prelude::*;

        #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
        #[sea_orm(table_name = "widgets")]
        pub struct Model {
            #[sea_orm(primary_key)]
            pub id: i64,
            pub label: String,
        }

        #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
        pub enum Relation {}

        impl ActiveModelBehavior for ActiveModel {}
    }

    fn widget(id: i64, label: &str) -> widget::Model {
        widget::Model {
            id,
            label: label.to_string(),
        }
    }

    #[tokio::test]
    async fn test_find_by_id_returns_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![widget(7, "seven")]])
            .into_connection();
        let repo = BaseRepository::<widget::Entity>::new(db);

        let found = repo.find_by_id(7i64).await.unwrap();

        assert_eq!(found, Some(widget(7, "seven")));
    }

    #[tokio::test]
    async fn test_fetch_page_returns_rows_in_store_order() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![widget(3, "c"), widget(4, "d")]])
            .into_connection();
        let repo = BaseRepository::<widget::Entity>::new(db);

        let rows = repo.fetch_page(2, 2, widget::Column::Id).await.unwrap();

        assert_eq!(rows.iter().map(|w| w.id).collect::<Vec<_>>(), vec![3, 4]);
    }

    #[tokio::test]
    async fn test_delete_by_id_reports_rows_affected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();
        let repo = BaseRepository::<widget::Entity>::new(db);

        assert_eq!(repo.delete_by_id(1i64).await.unwrap(), 1);
        assert_eq!(repo.delete_by_id(1i64).await.unwrap(), 0);
    }
}
