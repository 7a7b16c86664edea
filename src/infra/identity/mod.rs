pub mod http_identity_service;
