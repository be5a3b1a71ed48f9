use diesel_migrations::{embed_migrations, EmbeddedMigrations};

pub mod seed;
pub mod serve;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");
