// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use teamdesk_domain::{ImportRow, RoleDirectory};

pub fn group_row(team_name: &str, sub_team_name: &str) -> ImportRow {
    ImportRow::new(vec![
        (String::from("team_name"), team_name.to_string()),
        (String::from("sub_team_name"), sub_team_name.to_string()),
    ])
}

pub fn member_row(name: &str, email: &str, team_name: &str) -> ImportRow {
    ImportRow::new(vec![
        (String::from("name"), name.to_string()),
        (String::from("email"), email.to_string()),
        (String::from("team_name"), team_name.to_string()),
    ])
}

pub fn member_row_with(
    name: &str,
    email: &str,
    team_name: &str,
    extra: &[(&str, &str)],
) -> ImportRow {
    let mut columns: Vec<(String, String)> = vec![
        (String::from("name"), name.to_string()),
        (String::from("email"), email.to_string()),
        (String::from("team_name"), team_name.to_string()),
    ];
    for (k, v) in extra {
        columns.push(((*k).to_string(), (*v).to_string()));
    }
    ImportRow::new(columns)
}

pub fn test_roles() -> RoleDirectory {
    RoleDirectory::from_roles(&["Manager", "Contributor", "Viewer"])
}
