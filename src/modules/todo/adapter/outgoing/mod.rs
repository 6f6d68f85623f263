pub mod sea_orm_entity;
pub mod todo_query_postgres;
pub mod todo_repository_postgres;

pub use todo_query_postgres::TodoQueryPostgres;
pub use todo_repository_postgres::TodoRepositoryPostgres;
