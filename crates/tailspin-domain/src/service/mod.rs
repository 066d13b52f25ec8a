//! Domain Services - Business logic that doesn't belong to a single entity

pub mod seeder;
