pub mod db;
pub mod post;
