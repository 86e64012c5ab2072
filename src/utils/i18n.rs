// ============================================================================
// MÓDULO DE INTERNACIONALIZACIÓN
// ============================================================================

use std::collections::HashMap;

/// Obtener diccionario de traducciones para un idioma (ES por defecto)
fn get_translations(lang: &str) -> HashMap<&'static str, &'static str> {
    let mut translations = HashMap::new();

    match lang.to_uppercase().as_str() {
        "EN" => {
            // Formulario
            translations.insert("placeholder_codigo", "Enter your tracking code");
            translations.insert("rastrear", "Track");
            translations.insert("buscando", "Searching...");
            translations.insert("error", "Error");

            // Cabecera
            translations.insert("pedido", "ORDER");
            translations.insert("ultima_actualizacion", "Last Update");
            translations.insert("sin_fecha", "—");

            // Pasos
            translations.insert("paso_procesado", "Processed");
            translations.insert("paso_enviado", "Shipped");
            translations.insert("paso_en_reparto", "Out for Delivery");
            translations.insert("paso_entregado", "Delivered");

            // Incidencia
            translations.insert("incidencia_titulo", "There is an issue with your shipment");
            translations.insert(
                "incidencia_texto",
                "Our team is already working on it. Please contact customer support for more information.",
            );

            // Panel de detalle
            translations.insert("detalles_de", "Details for");
            translations.insert("fecha_hora", "Date and Time");
            translations.insert("ubicacion", "Location");
            translations.insert("descripcion", "Description");
        }
        _ => {
            translations.insert("placeholder_codigo", "Introduce tu código de seguimiento");
            translations.insert("rastrear", "Rastrear");
            translations.insert("buscando", "Buscando...");
            translations.insert("error", "Error");

            translations.insert("pedido", "PEDIDO");
            translations.insert("ultima_actualizacion", "Última Actualización");
            translations.insert("sin_fecha", "—");

            translations.insert("paso_procesado", "Procesado");
            translations.insert("paso_enviado", "Enviado");
            translations.insert("paso_en_reparto", "En Reparto");
            translations.insert("paso_entregado", "Entregado");

            translations.insert("incidencia_titulo", "Hay una incidencia con tu envío");
            translations.insert(
                "incidencia_texto",
                "Nuestro equipo ya está trabajando en ello. Contacta con atención al cliente para más información.",
            );

            translations.insert("detalles_de", "Detalles de");
            translations.insert("fecha_hora", "Fecha y Hora");
            translations.insert("ubicacion", "Ubicación");
            translations.insert("descripcion", "Descripción");
        }
    }

    translations
}

/// Traducir una clave; si no existe se devuelve la clave
pub fn t(key: &str, lang: &str) -> String {
    get_translations(lang)
        .get(key)
        .map(|s| s.to_string())
        .unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::STATUS_ORDER;

    #[test]
    fn spanish_is_the_default() {
        assert_eq!(t("rastrear", "es"), "Rastrear");
        assert_eq!(t("rastrear", "fr"), "Rastrear");
        assert_eq!(t("rastrear", "EN"), "Track");
    }

    #[test]
    fn every_step_has_a_label_in_both_languages() {
        let labels: Vec<String> = STATUS_ORDER.iter().map(|s| t(s.label_key(), "es")).collect();
        assert_eq!(labels, vec!["Procesado", "Enviado", "En Reparto", "Entregado"]);

        for status in STATUS_ORDER {
            assert_ne!(t(status.label_key(), "en"), status.label_key());
        }
    }

    #[test]
    fn missing_key_returns_key() {
        assert_eq!(t("no_existe", "es"), "no_existe");
    }
}
