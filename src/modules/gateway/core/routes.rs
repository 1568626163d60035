// Prefix routing table for the gateway.
//
// Responsibilities
// - Map a request path to the backend service that owns it.
// - Strip the matched prefix and keep the query string.
//
// Boundaries
// - Prefixes only match on whole path segments: `/api/usersx` is not `/api/users`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseRewrite {
    None,
    /// Cookie domains and auth redirects are pointed back at the gateway.
    AuthRedirects,
}

/// One backend the gateway knows about, with where to find its port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceSpec {
    pub service: &'static str,
    pub prefix: &'static str,
    pub port_env: &'static str,
    pub default_port: u16,
    pub rewrite: ResponseRewrite,
}

pub const SERVICES: [ServiceSpec; 9] = [
    ServiceSpec {
        service: "user-service",
        prefix: "/api/users",
        port_env: "USER_SERVICE_PORT",
        default_port: 3001,
        rewrite: ResponseRewrite::AuthRedirects,
    },
    ServiceSpec {
        service: "event-service",
        prefix: "/api/events",
        port_env: "EVENT_SERVICE_PORT",
        default_port: 3002,
        rewrite: ResponseRewrite::None,
    },
    ServiceSpec {
        service: "discovery-service",
        prefix: "/api/discovery",
        port_env: "DISCOVERY_SERVICE_PORT",
        default_port: 3003,
        rewrite: ResponseRewrite::None,
    },
    ServiceSpec {
        service: "request-service",
        prefix: "/api/requests",
        port_env: "REQUEST_SERVICE_PORT",
        default_port: 3004,
        rewrite: ResponseRewrite::None,
    },
    ServiceSpec {
        service: "notification-service",
        prefix: "/api/notifications",
        port_env: "NOTIFICATION_SERVICE_PORT",
        default_port: 3005,
        rewrite: ResponseRewrite::None,
    },
    ServiceSpec {
        service: "feedback-service",
        prefix: "/api/feedback",
        port_env: "FEEDBACK_SERVICE_PORT",
        default_port: 3006,
        rewrite: ResponseRewrite::None,
    },
    ServiceSpec {
        service: "safety-service",
        prefix: "/api/safety",
        port_env: "SAFETY_SERVICE_PORT",
        default_port: 3007,
        rewrite: ResponseRewrite::None,
    },
    ServiceSpec {
        service: "payment-service",
        prefix: "/api/payments",
        port_env: "PAYMENT_SERVICE_PORT",
        default_port: 3008,
        rewrite: ResponseRewrite::None,
    },
    ServiceSpec {
        service: "partnership-service",
        prefix: "/api/partnerships",
        port_env: "PARTNERSHIP_SERVICE_PORT",
        default_port: 3009,
        rewrite: ResponseRewrite::None,
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRoute {
    pub service: &'static str,
    pub prefix: String,
    /// Scheme and authority, no trailing slash.
    pub upstream: String,
    pub rewrite: ResponseRewrite,
}

impl ServiceRoute {
    pub fn new(spec: &ServiceSpec, host: &str, port: u16) -> Self {
        Self {
            service: spec.service,
            prefix: spec.prefix.to_string(),
            upstream: format!("http://{host}:{port}"),
            rewrite: spec.rewrite,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ResolvedRoute<'a> {
    pub route: &'a ServiceRoute,
    /// Path and query to request from the upstream.
    pub path_and_query: String,
}

impl ResolvedRoute<'_> {
    pub fn url(&self) -> String {
        format!("{}{}", self.route.upstream, self.path_and_query)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<ServiceRoute>,
}

impl RouteTable {
    pub fn new(routes: Vec<ServiceRoute>) -> Self {
        Self { routes }
    }

    pub fn routes(&self) -> &[ServiceRoute] {
        &self.routes
    }

    pub fn resolve(&self, path: &str, query: Option<&str>) -> Option<ResolvedRoute<'_>> {
        self.routes.iter().find_map(|route| {
            let rest = strip_segment_prefix(path, &route.prefix)?;
            let mut path_and_query = if rest.is_empty() {
                "/".to_string()
            } else {
                rest.to_string()
            };
            if let Some(query) = query {
                path_and_query.push('?');
                path_and_query.push_str(query);
            }
            Some(ResolvedRoute {
                route,
                path_and_query,
            })
        })
    }
}

fn strip_segment_prefix<'p>(path: &'p str, prefix: &str) -> Option<&'p str> {
    let rest = path.strip_prefix(prefix)?;
    if rest.is_empty() || rest.starts_with('/') {
        Some(rest)
    } else {
        None
    }
}

#[cfg(test)]
mod route_table_tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn table() -> RouteTable {
        RouteTable::new(
            SERVICES
                .iter()
                .map(|spec| ServiceRoute::new(spec, "localhost", spec.default_port))
                .collect(),
        )
    }

    #[rstest]
    #[case("/api/users/auth/login", None, "user-service", "/auth/login")]
    #[case("/api/events", None, "event-service", "/")]
    #[case("/api/events/", None, "event-service", "/")]
    #[case("/api/events/1/join", Some("x=1&y=2"), "event-service", "/1/join?x=1&y=2")]
    #[case("/api/partnerships/list", None, "partnership-service", "/list")]
    fn it_should_strip_the_matched_prefix(
        table: RouteTable,
        #[case] path: &str,
        #[case] query: Option<&str>,
        #[case] service: &str,
        #[case] expected: &str,
    ) {
        let resolved = table.resolve(path, query).unwrap();
        assert_eq!(resolved.route.service, service);
        assert_eq!(resolved.path_and_query, expected);
    }

    #[rstest]
    #[case("/api/usersx")]
    #[case("/api")]
    #[case("/health")]
    #[case("/users/me")]
    fn it_should_not_match_partial_segments_or_foreign_paths(
        table: RouteTable,
        #[case] path: &str,
    ) {
        assert!(table.resolve(path, None).is_none());
    }

    #[rstest]
    fn it_should_build_the_upstream_url(table: RouteTable) {
        let resolved = table.resolve("/api/payments/charge", Some("id=3")).unwrap();
        assert_eq!(resolved.url(), "http://localhost:3008/charge?id=3");
    }

    #[rstest]
    fn it_should_only_rewrite_user_service_responses(table: RouteTable) {
        let rewriting: Vec<&str> = table
            .routes()
            .iter()
            .filter(|r| r.rewrite == ResponseRewrite::AuthRedirects)
            .map(|r| r.service)
            .collect();
        assert_eq!(rewriting, vec!["user-service"]);
    }
}
