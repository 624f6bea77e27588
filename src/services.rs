pub mod uniform_service;
