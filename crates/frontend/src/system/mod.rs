pub mod auth;
pub mod city;
pub mod native_bridge;
pub mod pages;
