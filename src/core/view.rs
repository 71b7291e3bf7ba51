use crate::domain::model::{Section, Service, TeamMember};

/// One-line navigation bar with the active section highlighted.
pub fn render_nav(active: Section) -> String {
    Section::ALL
        .iter()
        .map(|section| {
            if *section == active {
                format!("[{}]", section.id())
            } else {
                section.id().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Plain-text rendering of the loaded content for the CLI. Kept deliberately
/// shallow; no layout concerns live here.
pub fn render_services(services: &[Service]) -> String {
    if services.is_empty() {
        return "No services loaded.".to_string();
    }

    let mut lines = vec!["Servicios:".to_string()];
    for service in services {
        lines.push(format!("{} {}", service.icon, service.title));
        lines.push(format!("   {}", service.description));
        for feature in &service.features {
            lines.push(format!("   - {}", feature));
        }
    }
    lines.join("\n")
}

pub fn render_team(team: &[TeamMember]) -> String {
    if team.is_empty() {
        return "No team members loaded.".to_string();
    }

    let mut lines = vec!["Equipo:".to_string()];
    for member in team {
        lines.push(format!("{} ({})", member.name, member.role));
        lines.push(format!("   {}", member.bio));
        lines.push(format!("   {}", member.image));
        lines.push(format!("   {} | {}", member.linkedin, member.email));
    }
    lines.join("\n")
}
