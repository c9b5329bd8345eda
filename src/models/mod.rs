//! Diesel row and insert structs mirroring [`crate::schema`].

pub mod product;
