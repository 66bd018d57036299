pub mod health;
pub mod widgets;
