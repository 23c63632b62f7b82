pub mod admin_login;
