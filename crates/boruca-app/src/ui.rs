use boruca_config::ui::UiConfig;
use boruca_core::capitalize;
use boruca_types::{Direction, GroupedView};

pub fn welcome() -> String {
    [
        "¡Bienvenido a la aplicación del Diccionario Boruca!",
        "Esta aplicación te permite buscar palabras en el idioma Boruca.",
        "Escribe :help para ver los comandos.",
        "",
    ]
    .join("\n")
}

pub fn help() -> String {
    [
        "Comandos:",
        "  <palabra>   buscar en el idioma actual",
        "  :boruca     buscar palabras en Boruca",
        "  :es         buscar palabras en Español",
        "  :help       mostrar esta ayuda",
        "  :quit       salir",
        "",
    ]
    .join("\n")
}

pub fn footer(config: &UiConfig, last_download: &str) -> String {
    format!(
        "Versión {} - Data Fecha: {}\n\
         © 2024 Diccionario Boruca. Todos los derechos reservados. Visita {} para más información.\n",
        config.version, last_download, config.website_url
    )
}

pub fn prompt(direction: Direction) -> String {
    format!("[{}] Buscar: ", direction)
}

pub fn direction_changed(direction: Direction) -> String {
    format!("Buscando en {}.\n", direction)
}

pub fn unknown_command(command: &str) -> String {
    format!("Comando desconocido '{}'. Escribe :help.\n", command)
}

/// Result box per headword: capitalized word, numbered senses, examples, comments
pub fn results(query: &str, view: &GroupedView) -> String {
    if view.is_empty() {
        return format!("No se encontraron resultados para '{}'.\n", query);
    }

    let mut lines = Vec::new();
    for group in &view.groups {
        lines.push(capitalize(&group.headword));

        for sense in &group.senses {
            lines.push(format!(
                "  {}. ({}) {}",
                sense.index, sense.part_of_speech, sense.translation
            ));
            lines.push(format!(
                "      \"{}\" | \"{}\"",
                sense.example_boruca, sense.example_spanish
            ));
            if let Some(comment) = &sense.comment {
                lines.push(format!("      Comentario: {}", comment));
            }
        }
        lines.push(String::new());
    }
    lines.push(String::new());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use boruca_types::{SenseView, WordGroup};

    #[test]
    fn test_no_results_message() {
        assert_eq!(
            results("fuego", &GroupedView::default()),
            "No se encontraron resultados para 'fuego'.\n"
        );
    }

    #[test]
    fn test_group_rendering() {
        let view = GroupedView {
            groups: vec![WordGroup {
                headword: "ujtö".to_string(),
                senses: vec![
                    SenseView {
                        index: 1,
                        part_of_speech: "noun".to_string(),
                        translation: "Agua".to_string(),
                        example_boruca: "Ujtö kuá".to_string(),
                        example_spanish: "El agua".to_string(),
                        comment: None,
                    },
                    SenseView {
                        index: 2,
                        part_of_speech: "noun".to_string(),
                        translation: "Río".to_string(),
                        example_boruca: "a".to_string(),
                        example_spanish: "b".to_string(),
                        comment: Some("uso antiguo".to_string()),
                    },
                ],
            }],
        };

        let text = results("ujtö", &view);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Ujtö");
        assert_eq!(lines[1], "  1. (noun) Agua");
        assert_eq!(lines[2], "      \"Ujtö kuá\" | \"El agua\"");
        assert_eq!(lines[3], "  2. (noun) Río");
        assert_eq!(lines[5], "      Comentario: uso antiguo");
        assert!(!text.contains("Comentario: \n"));
    }

    #[test]
    fn test_footer_shows_download_date() {
        let text = footer(&UiConfig::default(), "2024-05-01 10:20:30");
        assert!(text.starts_with("Versión 1.0 - Data Fecha: 2024-05-01 10:20:30\n"));
        assert!(text.contains("https://www.example.com"));
    }
}
