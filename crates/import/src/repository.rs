// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::RepositoryError;
use crate::validate::MemberFields;
use std::future::Future;
use teamdesk_domain::{RowId, SubTeamRecord, TeamRecord};

/// The backend collaborator a reconciler run mutates through.
///
/// The reconciler binds no transport: callers implement this against
/// whatever concrete backend they use. Create calls fail with a generic
/// create-failed error on server-side conflict or validation failure;
/// the reconciler downgrades such failures to row failures and keeps
/// going.
pub trait EntityRepository {
    /// Creates a new team. New teams start active with no subteams.
    fn create_team(
        &mut self,
        name: &str,
    ) -> impl Future<Output = Result<TeamRecord, RepositoryError>> + Send;

    /// Creates a new subteam under an existing team.
    fn create_subteam(
        &mut self,
        team_id: i64,
        name: &str,
    ) -> impl Future<Output = Result<SubTeamRecord, RepositoryError>> + Send;

    /// Creates a new member under an existing team.
    fn create_member(
        &mut self,
        team_id: i64,
        fields: &MemberFields,
    ) -> impl Future<Output = Result<RowId, RepositoryError>> + Send;

    /// Deletes an entity by row id. Used by bulk actions, not by
    /// reconciler runs.
    fn delete_entity(
        &mut self,
        id: &RowId,
    ) -> impl Future<Output = Result<(), RepositoryError>> + Send;
}
