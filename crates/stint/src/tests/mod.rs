use axum_test::TestServer;

use crate::api::config::Config;

mod api;

pub(crate) fn server() -> TestServer {
  let config = Config::from_env().expect("default config should parse");

  TestServer::new(crate::api::routes(&config).unwrap())
}
