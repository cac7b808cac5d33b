pub mod activity_handlers;
