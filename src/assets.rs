// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Champion Randomizer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Image path resolution.

use std::path::{Component, Path, PathBuf};

/// Maps a champion's logical `image_path` to a location a viewer can fetch.
pub trait AssetResolver {
    fn resolve(&self, image_path: &str) -> String;
}

/// Resolves image paths below a local asset directory as `file://` URLs.
#[derive(Debug, Clone)]
pub struct DirAssetResolver {
    root: PathBuf,
}

impl DirAssetResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Parent-dir and root components are dropped so a catalog entry cannot escape the root.
    pub fn local_path(&self, image_path: &str) -> PathBuf {
        let mut path = self.root.clone();
        for component in Path::new(image_path).components() {
            if let Component::Normal(part) = component {
                path.push(part);
            }
        }
        path
    }
}

impl AssetResolver for DirAssetResolver {
    fn resolve(&self, image_path: &str) -> String {
        let path = self.local_path(image_path);
        let display = path.to_string_lossy().replace('\\', "/");
        if display.starts_with('/') {
            format!("file://{display}")
        } else {
            format!("file:///{display}")
        }
    }
}
