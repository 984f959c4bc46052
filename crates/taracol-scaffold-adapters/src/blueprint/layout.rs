//! Directory tree of the Taracol monorepo.

/// Every directory a run creates, parents implied.
pub const DIRECTORIES: &[&str] = &[
    "docs",
    // Protocol definitions
    "protocol/lexicons/tara/identity",
    "protocol/lexicons/tara/web",
    "protocol/lexicons/tara/migration",
    "protocol/lexicons/tara/feed",
    "protocol/lexicons/com.atproto/server",
    "protocol/lexicons/com.atproto/repo",
    "protocol/lexicons/com.atproto/sync",
    "protocol/specs",
    "protocol/reference-types",
    // Core implementation
    "core/taracol-types/src/identity",
    "core/taracol-types/src/web",
    "core/taracol-types/src/migration",
    "core/taracol-types/src/crypto",
    "core/taracol-types/tests",
    "core/taracol-crypto/src",
    "core/taracol-crypto/tests",
    "core/taracol-protocol/src/transport",
    "core/taracol-protocol/src/federation",
    "core/taracol-protocol/src/storage",
    "core/taracol-protocol/tests",
    // Microservices
    "services/identity-service/src/handlers",
    "services/identity-service/src/storage",
    "services/identity-service/proto",
    "services/identity-service/migrations/postgresql",
    "services/web-service/src/handlers",
    "services/web-service/src/storage",
    "services/web-service/proto",
    "services/web-service/migrations/postgresql",
    "services/relay-service/src/handlers",
    "services/relay-service/src/quic",
    "services/relay-service/proto",
    "services/pds-service/src/handlers",
    "services/pds-service/src/storage",
    "services/pds-service/proto",
    "services/ai-service/src/handlers",
    "services/ai-service/src/models",
    "services/ai-service/proto",
    "services/federation-service/src/handlers",
    "services/federation-service/src/quic",
    "services/federation-service/proto",
    // API gateway
    "gateway/src/routes",
    "gateway/src/grpc_clients",
    "gateway/src/adapters",
    "gateway/src/lexicon_generator",
    "gateway/src/middleware",
    "gateway/config",
    // Client applications
    "tara-client/web/src/components",
    "tara-client/web/src/api",
    "tara-client/web/src/stores",
    "tara-client/web/src/utils",
    "tara-client/web/public",
    "tara-client/mobile/ios",
    "tara-client/mobile/android",
    "tara-client/mobile/shared",
    "tara-client/desktop/src",
    // SDK packages
    "packages/tara-api/src/client",
    "packages/tara-api/src/lexicons/tara",
    "packages/tara-api/src/lexicons/atproto",
    "packages/tara-api/src/utils",
    "packages/tara-pro/src",
    "packages/migration-tools/src/importers",
    "packages/migration-tools/src/exporters",
    "packages/migration-tools/cli",
    // Development tools
    "tools/lexicon-codegen/src",
    "tools/benchmarks/src",
    "tools/monitoring/src",
    "tools/deployment/src",
    // Infrastructure
    "infrastructure/docker",
    "infrastructure/kubernetes/services",
    "infrastructure/kubernetes/ingress",
    "infrastructure/kubernetes/monitoring",
    "infrastructure/terraform/aws",
    "infrastructure/terraform/gcp",
    "infrastructure/terraform/monitoring",
    // Business strategy
    "business/market-research",
    "business/competitive-analysis",
    "business/monetization-experiments",
    "business/legal",
    "business/partnerships",
    // Examples and references
    "examples/basic-node/src",
    "examples/federation-demo/node1",
    "examples/federation-demo/node2",
    "examples/migration-example/src",
    // Testing
    "tests/protocol-compliance",
    "tests/integration",
    "tests/performance",
    "tests/security",
    "scripts",
];

/// Crates declared in the generated workspace `Cargo.toml`.
pub const WORKSPACE_MEMBERS: &[&str] = &[
    "core/taracol-types",
    "core/taracol-crypto",
    "core/taracol-protocol",
    "services/identity-service",
    "services/web-service",
    "services/relay-service",
    "services/pds-service",
    "services/ai-service",
    "services/federation-service",
    "gateway",
    "tools/lexicon-codegen",
    "tools/benchmarks",
    "examples/basic-node",
];

/// Microservices: crate name and the one-line description used in their doc comments.
pub const SERVICES: &[(&str, &str)] = &[
    ("identity-service", "Identity management and authentication"),
    ("web-service", "Post and thread management"),
    ("relay-service", "Relay and data aggregation"),
    ("pds-service", "Personal Data Server"),
    ("ai-service", "AI features and recommendations"),
    ("federation-service", "Federation and node communication"),
];

/// Module stubs for the core crates and the gateway.
pub const PLACEHOLDER_MODULES: &[&str] = &[
    "core/taracol-types/src/identity.rs",
    "core/taracol-types/src/web.rs",
    "core/taracol-types/src/migration.rs",
    "core/taracol-types/src/crypto.rs",
    "core/taracol-types/src/errors.rs",
    "core/taracol-crypto/src/signatures.rs",
    "core/taracol-crypto/src/keys.rs",
    "core/taracol-crypto/src/migration_proofs.rs",
    "core/taracol-protocol/src/transport.rs",
    "core/taracol-protocol/src/federation.rs",
    "core/taracol-protocol/src/storage.rs",
    "gateway/src/routes.rs",
    "gateway/src/grpc_clients.rs",
    "gateway/src/adapters.rs",
    "gateway/src/middleware.rs",
    "gateway/src/lexicon_generator.rs",
];

/// Per-service module stubs and their marker comment.
pub const SERVICE_MODULES: &[(&str, &str)] = &[
    ("handlers.rs", "// TODO: Implement service handlers\n"),
    ("storage.rs", "// TODO: Implement storage layer\n"),
    ("config.rs", "// TODO: Implement configuration\n"),
];
