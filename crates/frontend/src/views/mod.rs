pub mod add_artist;
pub mod add_events;
pub mod admin;
pub mod calendar;
pub mod info;
pub mod map;
pub mod playlists;
pub mod profile;
pub mod settings;
pub mod your_shows;
