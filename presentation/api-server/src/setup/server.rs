use std::any::Any;

use poem::middleware::{CatchPanic, Tracing};
use poem::{
    Endpoint, EndpointExt, Response, Route, Server as PoemServer, listener::TcpListener,
};

use crate::api::cors::CorsHeaders;
use crate::api::error::{ErrorBoundary, internal_error_response, panic_message};
use crate::api::graphql::routes::GRAPHQL_PATH;
use crate::api::info::routes::info;
use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    pub fn app(
        config: &AppConfig,
        container: DependencyContainer,
    ) -> impl Endpoint<Output = Response> + use<> {
        let routes = Route::new()
            .at("/", info)
            .at(GRAPHQL_PATH, container.graphql_api);

        Self::wrap(routes, config)
    }

    /// Applies the middleware stack, innermost first: panics become 500s,
    /// errors become responses, then CORS headers and access logging.
    pub fn wrap<E>(routes: E, config: &AppConfig) -> impl Endpoint<Output = Response> + use<E>
    where
        E: Endpoint + 'static,
    {
        let expose_details = config.expose_error_details;

        routes
            .with(
                CatchPanic::new().with_handler(move |payload: Box<dyn Any + Send>| {
                    let message = panic_message(payload.as_ref());
                    tracing::error!(panic = %message, "Handler panicked");
                    internal_error_response(&message, expose_details)
                }),
            )
            .with(ErrorBoundary::new(expose_details))
            .with(CorsHeaders::new(config.cors.clone()))
            .with(Tracing)
    }

    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = Self::app(&config, container);

        println!("Server running at http://{}", addr);
        println!("GraphQL endpoint at http://{}{}", addr, GRAPHQL_PATH);
        if config.graphql.graphiql_enabled {
            println!("GraphiQL IDE at http://{}{}", addr, GRAPHQL_PATH);
        }

        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
