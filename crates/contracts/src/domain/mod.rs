pub mod city;
pub mod event;
