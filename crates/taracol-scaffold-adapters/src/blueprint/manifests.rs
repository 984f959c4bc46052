//! npm `package.json` manifests, serialised with two-space indentation.

use serde_json::{Value, json};
use taracol_scaffold_core::{application::ApplicationError, error::ScaffoldResult};

pub fn web_client() -> Value {
    json!({
        "name": "tara-web",
        "version": "0.1.0",
        "private": true,
        "dependencies": {
            "react": "^18.0.0",
            "react-dom": "^18.0.0",
            "@tara/api": "workspace:*"
        },
        "devDependencies": {
            "typescript": "^5.0.0",
            "@types/react": "^18.0.0",
            "@types/react-dom": "^18.0.0",
            "vite": "^5.0.0"
        },
        "scripts": {
            "dev": "vite",
            "build": "vite build",
            "preview": "vite preview"
        }
    })
}

pub fn mobile_client() -> Value {
    json!({
        "name": "tara-mobile",
        "version": "0.1.0",
        "private": true,
        "dependencies": {
            "react-native": "^0.73.0",
            "@tara/api": "workspace:*"
        },
        "scripts": {
            "android": "react-native run-android",
            "ios": "react-native run-ios",
            "start": "react-native start"
        }
    })
}

pub fn tara_api() -> Value {
    json!({
        "name": "@tara/api",
        "version": "0.1.0",
        "description": "TypeScript client library for Taracol protocol",
        "main": "dist/index.js",
        "types": "dist/index.d.ts",
        "files": ["dist/"],
        "scripts": {
            "build": "tsc",
            "test": "jest",
            "generate": "node scripts/generate-from-lexicons.js"
        },
        "keywords": ["taracol", "tarantula", "decentralized", "social"],
        "license": "PROPRIETARY",
        "dependencies": {
            "axios": "^1.6.0"
        },
        "devDependencies": {
            "typescript": "^5.0.0",
            "@types/node": "^20.0.0",
            "jest": "^29.0.0"
        }
    })
}

pub fn tara_pro() -> Value {
    json!({
        "name": "@tara/pro",
        "version": "0.1.0",
        "description": "Premium features SDK for Taracol",
        "main": "dist/index.js",
        "types": "dist/index.d.ts",
        "license": "PROPRIETARY",
        "dependencies": {
            "@tara/api": "workspace:*"
        }
    })
}

pub fn workspace_root() -> Value {
    json!({
        "name": "taracol-workspace",
        "private": true,
        "workspaces": [
            "packages/*",
            "tara-client/*"
        ],
        "scripts": {
            "build": "./scripts/build.sh",
            "dev": "./scripts/setup-dev.sh",
            "test": "cargo test && npm run test --workspaces"
        },
        "devDependencies": {
            "concurrently": "^8.0.0"
        }
    })
}

/// Pretty-print with a trailing newline.
pub fn to_pretty(value: &Value) -> ScaffoldResult<String> {
    let mut out = serde_json::to_string_pretty(value).map_err(|e| {
        ApplicationError::RenderingFailed {
            reason: format!("cannot serialise package manifest: {e}"),
        }
    })?;
    out.push('\n');
    Ok(out)
}
