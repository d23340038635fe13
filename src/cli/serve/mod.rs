//! HTTP server for the localized site.

mod lifecycle;
mod path;
mod response;
mod router;

use crate::core::{is_shutdown, register_server};
use crate::site::Site;
use crate::{debug, log};
use anyhow::Result;
use std::sync::Arc;
use tiny_http::{Request, Server};

/// Bind, then handle requests until Ctrl+C.
pub fn serve(site: Arc<Site>) -> Result<()> {
    let config = &site.config;
    let (server, addr) = lifecycle::bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);
    register_server(Arc::clone(&server));

    log!("serve"; "http://{}", addr);
    if let Some(path) = &config.config_path {
        debug!("serve"; "config {}", path.display());
    }
    debug!("serve"; "content from {}", site.content.source().describe());
    debug!("serve"; "not redirected: {}", site.middleware.exclusions().join(", "));

    run_request_loop(&server, &site)
}

fn run_request_loop(server: &Server, site: &Arc<Site>) -> Result<()> {
    let pool = lifecycle::build_pool()?;

    for request in server.incoming_requests() {
        let site = Arc::clone(site);
        pool.spawn(move || {
            if let Err(e) = handle_request(request, &site) {
                log!("serve"; "request error: {e}");
            }
        });
    }
    Ok(())
}

fn handle_request(request: Request, site: &Site) -> Result<()> {
    let reply = router::route(site, request.method(), request.url(), is_shutdown());

    debug!("request"; "{} {} -> {}", request.method(), request.url(), reply.status);
    if reply.status == 500 {
        log!("error"; "{} {}", request.method(), request.url());
    }

    response::send(request, reply)
}
