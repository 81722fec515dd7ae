pub mod me;
pub mod signin;
pub mod signup;
