pub mod images;
pub mod professions;
pub mod profiles;
pub mod proposals;
pub mod request_professions;
pub mod requests;
pub mod reviews;
pub mod users;
pub mod worker_professions;
pub mod workers;
