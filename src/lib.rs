pub mod shared {
    pub mod core {
        pub mod validation;
    }
    pub mod infrastructure {
        pub mod config;
        pub mod telemetry;
        pub mod auth {
            pub mod token_verifier;
            pub mod tokens;
        }
        pub mod http {
            pub mod auth;
            pub mod errors;
            pub mod json;
            pub mod middleware;
        }
    }
}

pub mod modules {
    pub mod users {
        pub mod core {
            pub mod ports;
            pub mod user;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod register_user {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod login_user {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod view_profile {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_profile {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod request_verification {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod argon2_password_hasher;
                pub mod users_in_memory;
            }
        }
    }

    pub mod events {
        pub mod core {
            pub mod decide;
            pub mod event;
            pub mod ports;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod participants;
            pub mod retry;
            pub mod list_events {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_event {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_event {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_event {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod manage_attendance {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod events_in_memory;
                pub mod user_directory;
            }
        }
    }

    pub mod gateway {
        pub mod core {
            pub mod rewrite;
            pub mod routes;
        }
        pub mod use_cases {
            pub mod forward_request {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod upstream_client;
            }
        }
    }
}

pub mod shell;
