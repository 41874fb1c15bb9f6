pub mod attendance;
pub mod db;
