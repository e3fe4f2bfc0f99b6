pub mod replies;
pub mod topics;
