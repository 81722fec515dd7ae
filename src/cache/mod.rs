pub mod redis_service;
