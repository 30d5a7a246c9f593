/*---------- Imports ----------*/
use lambda_http::{service_fn, Error, IntoResponse, Request};
use send_message_api::{config::Config, dispatcher, logging};
use tracing::Instrument;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env();
    logging::init_logging(&config);

    lambda_http::run(service_fn(|request: Request| handler_fn(request))).await?;

    Ok(())
}

async fn handler_fn(request: Request) -> Result<impl IntoResponse, Error> {
    let span = tracing::info_span!("request", method = %request.method());

    async move { Ok::<_, Error>(dispatcher::handle(&request)?) }
        .instrument(span)
        .await
}
