//! Hash helpers – abstracción para poder cambiar de algoritmo sin tocar el
//! resto del core.

use blake3::Hasher;

use crate::suite::ExampleId;

/// Hashea la lista ordenada de ejemplos (ruta + nombre) y devuelve hex.
///
/// Cada segmento va prefijado con su longitud para que `["a b"]` y
/// `["a", "b"]` no colisionen. Dos corridas de la misma suite producen el
/// mismo fingerprint; reordenar o renombrar ejemplos lo cambia.
pub fn suite_fingerprint(ids: &[ExampleId]) -> String {
    let mut h = Hasher::new();
    h.update(&(ids.len() as u64).to_le_bytes());
    for id in ids {
        h.update(&(id.path.len() as u64).to_le_bytes());
        for segment in id.path.iter().chain(std::iter::once(&id.name)) {
            h.update(&(segment.len() as u64).to_le_bytes());
            h.update(segment.as_bytes());
        }
    }
    h.finalize().to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(path: &[&str], name: &str) -> ExampleId {
        ExampleId { path: path.iter().map(|s| s.to_string()).collect(),
                    name: name.to_string() }
    }

    #[test]
    fn fingerprint_is_hex_64_and_deterministic() {
        let ids = vec![id(&["Math"], "doubles x"), id(&["Math"], "x stays 1")];
        let h = suite_fingerprint(&ids);
        // blake3 hex length is 64
        assert_eq!(h.len(), 64);
        assert_eq!(h, suite_fingerprint(&ids.clone()));
    }

    #[test]
    fn fingerprint_depends_on_order_and_segmentation() {
        let a = vec![id(&["Math"], "a"), id(&["Math"], "b")];
        let b = vec![id(&["Math"], "b"), id(&["Math"], "a")];
        assert_ne!(suite_fingerprint(&a), suite_fingerprint(&b));

        let joined = vec![id(&["a b"], "c")];
        let split = vec![id(&["a", "b"], "c")];
        assert_ne!(suite_fingerprint(&joined), suite_fingerprint(&split));
    }
}
