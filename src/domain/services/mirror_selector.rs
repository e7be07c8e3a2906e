//! Mirror selector
//!
//! Resolves the mirror that replaces a remote repository. Rules keep their
//! declaration order:
//! 1. the first rule whose `mirror_of` is exactly the repository id wins
//! 2. otherwise the first rule whose `mirror_of` pattern matches wins
//!
//! In both passes the rule's layout pattern must accept the repository layout.

use crate::domain::entities::{Mirror, RemoteRepository};

const WILDCARD: &str = "*";
const EXTERNAL_WILDCARD: &str = "external:*";
const EXTERNAL_HTTP_WILDCARD: &str = "external:http:*";

#[derive(Debug, Clone, PartialEq, Eq)]
struct MirrorDef {
    id: String,
    url: String,
    layout: String,
    blocked: bool,
    mirror_of_ids: String,
    mirror_of_layouts: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MirrorSelector {
    mirrors: Vec<MirrorDef>,
}

impl MirrorSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_mirrors(mirrors: &[Mirror]) -> Self {
        let mut selector = Self::new();
        for mirror in mirrors {
            selector.add(mirror);
        }
        selector
    }

    pub fn add(&mut self, mirror: &Mirror) -> &mut Self {
        self.mirrors.push(MirrorDef {
            id: mirror.id.clone(),
            url: mirror.url.clone(),
            layout: mirror.layout.clone(),
            blocked: mirror.blocked,
            mirror_of_ids: mirror.mirror_of.clone(),
            mirror_of_layouts: mirror.mirror_of_layouts.clone(),
        });
        self
    }

    pub fn len(&self) -> usize {
        self.mirrors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mirrors.is_empty()
    }

    /// Mirror id that would replace `repository`, if any
    pub fn mirror_id_for(&self, repository: &RemoteRepository) -> Option<&str> {
        self.find(repository).map(|m| m.id.as_str())
    }

    /// The repository that replaces `repository`, or `None` when no rule applies.
    ///
    /// The replacement carries the mirror's id, url and blocked flag, keeps the
    /// original policies and records the original under `mirrored_repositories`.
    pub fn mirror_for(&self, repository: &RemoteRepository) -> Option<RemoteRepository> {
        let mirror = self.find(repository)?;

        let layout = if mirror.layout.is_empty() {
            repository.layout.clone()
        } else {
            mirror.layout.clone()
        };

        let mut mirrored = RemoteRepository::new(mirror.id.clone(), mirror.url.clone())
            .with_layout(layout)
            .with_releases(repository.releases.clone())
            .with_snapshots(repository.snapshots.clone());
        mirrored.blocked = mirror.blocked;
        mirrored.mirrored_repositories = vec![repository.clone()];
        Some(mirrored)
    }

    fn find(&self, repository: &RemoteRepository) -> Option<&MirrorDef> {
        if repository.id.is_empty() || self.mirrors.is_empty() {
            return None;
        }

        self.mirrors
            .iter()
            .find(|m| {
                m.mirror_of_ids == repository.id
                    && matches_layout(&repository.layout, &m.mirror_of_layouts)
            })
            .or_else(|| {
                self.mirrors.iter().find(|m| {
                    matches_pattern(repository, &m.mirror_of_ids)
                        && matches_layout(&repository.layout, &m.mirror_of_layouts)
                })
            })
    }
}

/// Whether a `mirror_of` pattern covers `repository`.
///
/// Segments are comma-separated. An `!id` segment naming the repository
/// vetoes the match no matter what came before; `external:*` style segments
/// keep scanning so a later exclusion can still apply.
pub fn matches_pattern(repository: &RemoteRepository, pattern: &str) -> bool {
    let id = repository.id.as_str();
    if pattern == WILDCARD || pattern == id {
        return true;
    }

    let mut result = false;
    for segment in pattern.split(',').map(str::trim) {
        if segment.len() > 1 && segment.starts_with('!') {
            if &segment[1..] == id {
                result = false;
                break;
            }
        } else if segment == id {
            result = true;
            break;
        } else if segment == EXTERNAL_WILDCARD && is_external(repository) {
            result = true;
        } else if segment == EXTERNAL_HTTP_WILDCARD && is_external_http(repository) {
            result = true;
        } else if segment == WILDCARD {
            result = true;
        }
    }
    result
}

/// Whether a layout pattern accepts `layout`. An empty pattern accepts all.
pub fn matches_layout(layout: &str, pattern: &str) -> bool {
    if pattern.is_empty() || pattern == WILDCARD || pattern == layout {
        return true;
    }

    let mut result = false;
    for segment in pattern.split(',').map(str::trim) {
        if segment.len() > 1 && segment.starts_with('!') {
            if &segment[1..] == layout {
                result = false;
                break;
            }
        } else if segment == layout {
            result = true;
            break;
        } else if segment == WILDCARD {
            result = true;
        }
    }
    result
}

fn is_external(repository: &RemoteRepository) -> bool {
    let local_host = matches!(repository.host().as_deref(), Some("localhost" | "127.0.0.1"));
    !(local_host || repository.protocol() == "file")
}

fn is_external_http(repository: &RemoteRepository) -> bool {
    matches!(
        repository.protocol().as_str(),
        "http" | "https" | "dav" | "dav:http" | "dav:https"
    ) && is_external(repository)
}
