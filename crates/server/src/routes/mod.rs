pub mod datasets;
pub mod game;
pub mod health;
pub mod i18n;
