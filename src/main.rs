// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-JetbrainsProxy-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of jetbrains-proxy and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! jetbrains-proxy CLI entrypoint.
//!
//! By default this serves MCP over stdio. Use `--mcp-http-port <port>` to serve streamable
//! HTTP at `http://127.0.0.1:<port>/mcp` instead.

use std::error::Error;
use std::sync::Arc;

use axum::Router;
use jetbrains_proxy::config::{parse_port, EndpointConfig, IDE_PORT_ENV};
use jetbrains_proxy::IdeProxy;
use rmcp::transport::{
    streamable_http_server::session::local::LocalSessionManager, StreamableHttpServerConfig,
    StreamableHttpService,
};
use tracing::info;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--ide-port <port>]\n  {program} [--ide-port <port>] --mcp-http-port <port>\n\nServes MCP over stdio by default; --mcp-http-port serves streamable HTTP at\n`http://127.0.0.1:<port>/mcp` instead (0 = ephemeral).\n\nThe IDE port is taken from --ide-port, else the {IDE_PORT_ENV} environment variable, else 63343."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    help: bool,
    ide_port: Option<u16>,
    mcp_http_port: Option<u16>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => options.help = true,
            "--ide-port" => {
                if options.ide_port.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.ide_port = Some(parse_port(&raw).map_err(|_| ())?);
            }
            "--mcp-http-port" => {
                if options.mcp_http_port.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let port: u16 = raw.parse().map_err(|_| ())?;
                options.mcp_http_port = Some(port);
            }
            _ => return Err(()),
        }
    }

    Ok(options)
}

fn endpoint_config(options: &CliOptions) -> Result<EndpointConfig, Box<dyn Error>> {
    match options.ide_port {
        Some(port) => Ok(EndpointConfig::with_port(port)),
        None => Ok(EndpointConfig::from_env()?),
    }
}

async fn serve_http(mcp: IdeProxy, port: u16) -> Result<(), Box<dyn Error>> {
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
    let local_addr = listener.local_addr()?;

    let config = StreamableHttpServerConfig {
        stateful_mode: true,
        ..StreamableHttpServerConfig::default()
    };
    let session_manager = Arc::new(LocalSessionManager::default());
    let mcp_service = StreamableHttpService::new(move || Ok(mcp.clone()), session_manager, config);

    let router = Router::new().nest_service("/mcp", mcp_service);
    eprintln!("JetBrains Proxy MCP Server running on http://{local_addr}/mcp");
    axum::serve(listener, router).await?;
    Ok(())
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "jetbrains-proxy".to_owned());

        let options = match parse_options(args) {
            Ok(options) if options.help => {
                print_usage(&program);
                return Ok(());
            }
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        jetbrains_proxy::logging::init();

        let mcp = IdeProxy::from_config(endpoint_config(&options)?)?;
        info!(ide = %mcp.endpoint().base_url(), "forwarding tool calls to IDE");

        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;

        match options.mcp_http_port {
            Some(port) => runtime.block_on(serve_http(mcp, port))?,
            None => runtime.block_on(async move {
                eprintln!("JetBrains Proxy MCP Server running on stdio");
                mcp.serve_stdio().await
            })?,
        }

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("jetbrains-proxy: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{endpoint_config, parse_options, CliOptions};

    #[test]
    fn parses_empty_args() {
        let options = parse_options(std::iter::empty()).expect("parse options");
        assert_eq!(options, CliOptions::default());
    }

    #[test]
    fn parses_ide_port() {
        let options = parse_options(["--ide-port".to_owned(), "63342".to_owned()].into_iter())
            .expect("parse options");
        assert_eq!(options.ide_port, Some(63342));
        assert_eq!(options.mcp_http_port, None);
    }

    #[test]
    fn ide_port_flag_wins_over_environment() {
        let options = parse_options(["--ide-port".to_owned(), "1234".to_owned()].into_iter())
            .expect("parse options");
        let config = endpoint_config(&options).expect("config");
        assert_eq!(config.port(), 1234);
    }

    #[test]
    fn parses_mcp_http_port() {
        let options = parse_options(["--mcp-http-port".to_owned(), "0".to_owned()].into_iter())
            .expect("parse options");
        assert_eq!(options.mcp_http_port, Some(0));
        assert_eq!(options.ide_port, None);
    }

    #[test]
    fn parses_help() {
        let options = parse_options(["--help".to_owned()].into_iter()).expect("parse options");
        assert!(options.help);
        let options = parse_options(["-h".to_owned()].into_iter()).expect("parse options");
        assert!(options.help);
    }

    #[test]
    fn rejects_zero_ide_port() {
        parse_options(["--ide-port".to_owned(), "0".to_owned()].into_iter()).unwrap_err();
    }

    #[test]
    fn rejects_non_numeric_ports() {
        parse_options(["--ide-port".to_owned(), "ide".to_owned()].into_iter()).unwrap_err();
        parse_options(["--mcp-http-port".to_owned(), "http".to_owned()].into_iter()).unwrap_err();
    }

    #[test]
    fn rejects_missing_values() {
        parse_options(["--ide-port".to_owned()].into_iter()).unwrap_err();
        parse_options(["--mcp-http-port".to_owned()].into_iter()).unwrap_err();
    }

    #[test]
    fn rejects_duplicate_flags() {
        parse_options(
            ["--ide-port".to_owned(), "1".to_owned(), "--ide-port".to_owned(), "2".to_owned()]
                .into_iter(),
        )
        .unwrap_err();
    }

    #[test]
    fn rejects_unknown_args() {
        parse_options(["--nope".to_owned()].into_iter()).unwrap_err();
        parse_options(["positional".to_owned()].into_iter()).unwrap_err();
    }
}
