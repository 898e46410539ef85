// src/noyau/format.rs
//
// Rendu texte d’un résultat fini.
// - entier : pas de point décimal ("4/2" -> "2")
// - sinon : arrondi à `decimales` chiffres, puis relu (les zéros finaux disparaissent)
// - -0 s’affiche "0"

/// Précision d’arrondi par défaut.
pub const DECIMALES_DEFAUT: usize = 12;

/// Garde-fou : au-delà, f64 n’a plus de chiffres significatifs à montrer.
pub const DECIMALES_MAX: usize = 17;

fn sans_zero_negatif(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        x
    }
}

/// `x` doit être fini (la façade filtre avant).
pub fn format_resultat(x: f64, decimales: usize) -> String {
    if x.fract() == 0.0 {
        return format!("{}", sans_zero_negatif(x));
    }

    let arrondi = format!("{:.*}", decimales.min(DECIMALES_MAX), x);
    match arrondi.parse::<f64>() {
        Ok(relu) => format!("{}", sans_zero_negatif(relu)),
        Err(_) => arrondi,
    }
}
