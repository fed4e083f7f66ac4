// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-memory dataset store backing the demo server.
//!
//! The store composes the import crate's entity directory with the
//! listing, filtering, and pagination the console's member table needs,
//! and binds the selection model's id-fetch seam to the active filter.

use std::future::Future;
use teamdesk::PagedIdFetcher;
use teamdesk_api::{ListMembersResponse, MemberInfo};
use teamdesk_domain::{MemberRecord, RowId, TeamRecord};
use teamdesk_import::InMemoryDirectory;

/// The filter a member listing or id fetch runs under.
#[derive(Debug, Clone, Default)]
pub struct MemberFilter {
    /// Case-insensitive substring match against name and email.
    pub search: Option<String>,
    /// Restrict to one team.
    pub team_id: Option<i64>,
}

impl MemberFilter {
    fn matches(&self, member: &MemberRecord) -> bool {
        if let Some(team_id) = self.team_id
            && member.team_id != team_id
        {
            return false;
        }
        if let Some(search) = &self.search {
            let needle: String = search.to_lowercase();
            return member.name.to_lowercase().contains(&needle)
                || member.email.to_lowercase().contains(&needle);
        }
        true
    }
}

/// The console's dataset: teams, subteams, and members.
#[derive(Debug, Clone, Default)]
pub struct ConsoleStore {
    directory: InMemoryDirectory,
}

impl ConsoleStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            directory: InMemoryDirectory::new(),
        }
    }

    /// Mutable access to the underlying entity directory, for repository
    /// operations (imports, deletions).
    pub const fn directory_mut(&mut self) -> &mut InMemoryDirectory {
        &mut self.directory
    }

    /// The currently-known teams.
    #[must_use]
    pub fn teams(&self) -> &[TeamRecord] {
        self.directory.teams()
    }

    /// The currently-known members.
    #[must_use]
    pub fn members(&self) -> &[MemberRecord] {
        self.directory.members()
    }

    /// Members matching the filter, sorted by name then id.
    fn matching_members(&self, filter: &MemberFilter) -> Vec<&MemberRecord> {
        let mut members: Vec<&MemberRecord> = self
            .directory
            .members()
            .iter()
            .filter(|m| filter.matches(m))
            .collect();
        members.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        members
    }

    /// One page of the filtered member listing.
    ///
    /// Pages are 1-based; a page past the end is simply empty.
    #[must_use]
    pub fn list_members(
        &self,
        filter: &MemberFilter,
        page: u32,
        page_size: u32,
    ) -> ListMembersResponse {
        let matching: Vec<&MemberRecord> = self.matching_members(filter);
        let total_matching: u64 = matching.len() as u64;

        let start: usize = (page.saturating_sub(1) as usize) * page_size as usize;
        let members: Vec<MemberInfo> = matching
            .into_iter()
            .skip(start)
            .take(page_size as usize)
            .map(|m| MemberInfo {
                id: m.id.to_string(),
                name: m.name.clone(),
                email: m.email.clone(),
                role: m.role.clone(),
                designation: m.designation.clone(),
                team_id: m.team_id,
            })
            .collect();

        ListMembersResponse {
            members,
            page,
            page_size,
            total_matching,
        }
    }

    /// The complete id set for a filter, across all pages.
    #[must_use]
    pub fn matching_ids(&self, filter: &MemberFilter) -> Vec<RowId> {
        self.matching_members(filter)
            .into_iter()
            .map(|m| m.id.clone())
            .collect()
    }
}

/// Id fetcher over a snapshot taken while the store lock is held.
///
/// The snapshot is taken only when the incoming selection is in
/// all-selected mode; explicit selections never consult the fetcher.
pub struct SnapshotIdFetcher {
    ids: Vec<RowId>,
}

impl SnapshotIdFetcher {
    /// Wraps a previously-fetched id snapshot.
    #[must_use]
    pub const fn new(ids: Vec<RowId>) -> Self {
        Self { ids }
    }
}

impl PagedIdFetcher for SnapshotIdFetcher {
    type Error = String;

    fn fetch_all_ids(&self) -> impl Future<Output = Result<Vec<RowId>, Self::Error>> + Send {
        let ids: Vec<RowId> = self.ids.clone();
        async move { Ok(ids) }
    }
}
