pub mod config;
pub mod dispatcher;
pub mod logging;

pub mod models {
    pub mod message;
    pub mod request;
}

pub mod utils {
    pub mod body;
    pub mod http;
}
