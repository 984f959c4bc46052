//! The built-in Taracol blueprint.
//!
//! Directory list and file contents are fixed at compile time. Only the
//! microservice files are parameterized (`{{SERVICE_NAME}}`,
//! `{{SERVICE_DESCRIPTION}}`); the npm manifests are built as JSON values and
//! serialised once here.

pub mod layout;
pub mod manifests;

use taracol_scaffold_core::{
    domain::{Blueprint, FileSpec, Section},
    error::{ScaffoldError, ScaffoldResult},
};
use tracing::debug;

pub use layout::{DIRECTORIES, PLACEHOLDER_MODULES, SERVICES, SERVICE_MODULES, WORKSPACE_MEMBERS};

/// Files written only when missing.
pub const CREATE_IF_ABSENT: &[&str] = &[".env.example"];

/// Files marked executable after writing.
pub const EXECUTABLE_SCRIPTS: &[&str] = &["scripts/setup-dev.sh", "scripts/build.sh"];

/// Marker written into core and gateway module stubs.
pub const PLACEHOLDER_MARKER: &str = "// TODO: Implement\n";

macro_rules! template {
    ($path:literal) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/", $path))
    };
}

/// Assemble the Taracol monorepo blueprint.
pub fn taracol_blueprint() -> ScaffoldResult<Blueprint> {
    let blueprint = Blueprint::builder("taracol")
        .directories(DIRECTORIES.iter().copied())
        .section(
            Section::new("📦", "Creating workspace configuration...")
                .file(FileSpec::literal("Cargo.toml", template!("workspace/Cargo.toml.tmpl"))),
        )
        .section(core_crates())
        .section(services())
        .section(gateway())
        .section(clients()?)
        .section(sdk_packages()?)
        .section(infrastructure())
        .section(scripts())
        .section(
            Section::new("🚫", "Creating .gitignore...")
                .file(FileSpec::literal(".gitignore", template!("root/gitignore.tmpl"))),
        )
        .section(root_files()?)
        .section(placeholders())
        .build()
        .map_err(ScaffoldError::Domain)?;

    debug!(
        directories = blueprint.directories.len(),
        files = blueprint.file_count(),
        "built-in blueprint assembled"
    );
    Ok(blueprint)
}

fn core_crates() -> Section {
    Section::new("🦀", "Creating core crates...").files([
        FileSpec::literal(
            "core/taracol-types/Cargo.toml",
            template!("core/types.Cargo.toml.tmpl"),
        ),
        FileSpec::literal("core/taracol-types/src/lib.rs", template!("core/types.lib.rs.tmpl")),
        FileSpec::literal(
            "core/taracol-crypto/Cargo.toml",
            template!("core/crypto.Cargo.toml.tmpl"),
        ),
        FileSpec::literal("core/taracol-crypto/src/lib.rs", template!("core/crypto.lib.rs.tmpl")),
        FileSpec::literal(
            "core/taracol-protocol/Cargo.toml",
            template!("core/protocol.Cargo.toml.tmpl"),
        ),
        FileSpec::literal(
            "core/taracol-protocol/src/lib.rs",
            template!("core/protocol.lib.rs.tmpl"),
        ),
    ])
}

fn services() -> Section {
    let files = SERVICES.iter().flat_map(|&(name, description)| {
        let base = format!("services/{name}");
        [
            ("Cargo.toml", template!("service/Cargo.toml.tmpl")),
            ("src/main.rs", template!("service/main.rs.tmpl")),
            ("src/lib.rs", template!("service/lib.rs.tmpl")),
            ("build.rs", template!("service/build.rs.tmpl")),
        ]
        .map(|(file, source)| {
            FileSpec::parameterized(format!("{base}/{file}"), source)
                .with_variable("SERVICE_NAME", name)
                .with_variable("SERVICE_DESCRIPTION", description)
        })
    });

    Section::new("🔧", "Creating microservices...").files(files)
}

fn gateway() -> Section {
    Section::new("🌐", "Creating API gateway...").files([
        FileSpec::literal("gateway/Cargo.toml", template!("gateway/Cargo.toml.tmpl")),
        FileSpec::literal("gateway/src/main.rs", template!("gateway/main.rs.tmpl")),
        FileSpec::literal("gateway/src/lib.rs", template!("gateway/lib.rs.tmpl")),
    ])
}

fn clients() -> ScaffoldResult<Section> {
    Ok(Section::new("💻", "Creating client files...").files([
        FileSpec::literal(
            "tara-client/web/package.json",
            manifests::to_pretty(&manifests::web_client())?,
        ),
        FileSpec::literal(
            "tara-client/mobile/package.json",
            manifests::to_pretty(&manifests::mobile_client())?,
        ),
    ]))
}

fn sdk_packages() -> ScaffoldResult<Section> {
    Ok(Section::new("📚", "Creating SDK packages...").files([
        FileSpec::literal(
            "packages/tara-api/package.json",
            manifests::to_pretty(&manifests::tara_api())?,
        ),
        FileSpec::literal(
            "packages/tara-pro/package.json",
            manifests::to_pretty(&manifests::tara_pro())?,
        ),
    ]))
}

fn infrastructure() -> Section {
    Section::new("🐳", "Creating infrastructure files...").files([
        FileSpec::literal("docker-compose.yml", template!("infra/docker-compose.yml.tmpl")),
        FileSpec::literal(".env.example", template!("infra/env.example.tmpl")).create_if_absent(),
    ])
}

fn scripts() -> Section {
    Section::new("📜", "Creating utility scripts...").files([
        FileSpec::literal("scripts/setup-dev.sh", template!("scripts/setup-dev.sh.tmpl"))
            .executable(),
        FileSpec::literal("scripts/build.sh", template!("scripts/build.sh.tmpl")).executable(),
    ])
}

fn root_files() -> ScaffoldResult<Section> {
    Ok(Section::new("📄", "Creating root files...").files([
        FileSpec::literal(
            "package.json",
            manifests::to_pretty(&manifests::workspace_root())?,
        ),
        FileSpec::literal("README.md", template!("root/README.md.tmpl")),
    ]))
}

fn placeholders() -> Section {
    let modules = PLACEHOLDER_MODULES
        .iter()
        .map(|&path| FileSpec::literal(path, PLACEHOLDER_MARKER));

    let service_modules = SERVICES.iter().flat_map(|&(name, _)| {
        SERVICE_MODULES.iter().map(move |&(file, marker)| {
            FileSpec::literal(format!("services/{name}/src/{file}"), marker)
        })
    });

    Section::new("📝", "Creating placeholder files...").files(modules.chain(service_modules))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use taracol_scaffold_core::domain::{TemplateContent, WritePolicy};

    use super::*;

    fn file<'a>(bp: &'a Blueprint, path: &str) -> &'a FileSpec {
        bp.files()
            .find(|f| f.path.as_str() == path)
            .unwrap_or_else(|| panic!("{path} missing from blueprint"))
    }

    #[test]
    fn blueprint_builds() {
        let bp = taracol_blueprint().unwrap();
        assert_eq!(bp.directories.len(), DIRECTORIES.len());
        assert_eq!(bp.sections.len(), 11);
    }

    #[test]
    fn only_env_example_is_create_if_absent() {
        let bp = taracol_blueprint().unwrap();
        let kept: Vec<_> = bp
            .files()
            .filter(|f| f.policy == WritePolicy::CreateIfAbsent)
            .map(|f| f.path.as_str())
            .collect();
        assert_eq!(kept, CREATE_IF_ABSENT);
    }

    #[test]
    fn exactly_the_two_scripts_are_executable() {
        let bp = taracol_blueprint().unwrap();
        let exec: HashSet<&str> = bp
            .files()
            .filter(|f| f.permissions.executable_flag())
            .map(|f| f.path.as_str())
            .collect();
        let expected: HashSet<&str> = EXECUTABLE_SCRIPTS.iter().copied().collect();
        assert_eq!(exec, expected);
    }

    #[test]
    fn every_service_gets_four_sources_and_three_stubs() {
        let bp = taracol_blueprint().unwrap();
        for (name, _) in SERVICES {
            for file in ["Cargo.toml", "src/main.rs", "src/lib.rs", "build.rs"] {
                let spec = file_for(&bp, name, file);
                assert!(matches!(spec.content, TemplateContent::Parameterized(_)));
            }
            for (module, _) in SERVICE_MODULES {
                file_for(&bp, name, &format!("src/{module}"));
            }
        }
    }

    fn file_for<'a>(bp: &'a Blueprint, service: &str, file: &str) -> &'a FileSpec {
        self::file(bp, &format!("services/{service}/{file}"))
    }

    #[test]
    fn workspace_manifest_lists_every_member() {
        let bp = taracol_blueprint().unwrap();
        let TemplateContent::Literal(src) = &file(&bp, "Cargo.toml").content else {
            panic!("workspace manifest should be literal");
        };
        for member in WORKSPACE_MEMBERS {
            assert!(src.as_str().contains(&format!("\"{member}\"")), "{member}");
        }
    }

    #[test]
    fn env_example_holds_only_placeholders() {
        let bp = taracol_blueprint().unwrap();
        let TemplateContent::Literal(src) = &file(&bp, ".env.example").content else {
            panic!(".env.example should be literal");
        };
        let jwt = src
            .as_str()
            .lines()
            .find(|l| l.starts_with("JWT_SECRET="))
            .unwrap();
        assert!(jwt.contains("change-in-production"));
        for key in ["OPENAI_API_KEY", "AWS_ACCESS_KEY_ID", "AWS_SECRET_ACCESS_KEY"] {
            let line = src.as_str().lines().find(|l| l.contains(key)).unwrap();
            assert!(line.starts_with('#') && line.ends_with('='), "{line}");
        }
    }
}
