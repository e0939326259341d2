pub mod default_basic_auth_extractor;
