pub mod db;
pub mod error;
pub mod restaurant {
    pub mod entity;
    pub mod repository;
}
pub mod plate {
    pub mod entity;
    pub mod repository;
}
