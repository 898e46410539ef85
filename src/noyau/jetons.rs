// src/noyau/jetons.rs

/// Opérateurs. `Neg` (moins unaire) n’est jamais produit par `tokenize` :
/// c’est la conversion RPN qui le fabrique.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret, // ^
    Neg,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Assoc {
    Gauche,
    Droite,
}

impl Op {
    pub fn depuis_char(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Plus),
            '-' => Some(Op::Minus),
            '*' => Some(Op::Star),
            '/' => Some(Op::Slash),
            '%' => Some(Op::Percent),
            '^' => Some(Op::Caret),
            _ => None,
        }
    }

    pub fn symbole(self) -> &'static str {
        match self {
            Op::Plus => "+",
            Op::Minus => "-",
            Op::Star => "*",
            Op::Slash => "/",
            Op::Percent => "%",
            Op::Caret => "^",
            Op::Neg => "neg",
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            Op::Plus | Op::Minus => 1,
            Op::Star | Op::Slash | Op::Percent => 2,
            Op::Caret | Op::Neg => 3,
        }
    }

    pub fn associativite(self) -> Assoc {
        match self {
            Op::Caret | Op::Neg => Assoc::Droite,
            _ => Assoc::Gauche,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    // Texte brut : la conversion en f64 attend l’évaluation.
    Num(String),

    // Fonctions, constantes, ou nom inconnu (l’échec arrive à l’évaluation).
    Ident(String),

    Op(Op),

    LPar,
    RPar,
    Virgule,
}

/// Tokenize une chaîne en jetons. N’échoue jamais.
///
/// - espaces ignorés
/// - suite maximale de chiffres et de '.' -> Num (aucune validation : "1.2.3" passe)
/// - suite maximale de lettres ASCII -> Ident (casse conservée)
/// - + - * / % ^ ( ) , -> jeton d’un caractère
/// - tout le reste est sauté en silence (la liste blanche de la façade filtre avant)
pub fn tokenize(s: &str) -> Vec<Tok> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            out.push(Tok::Num(chars[start..i].iter().collect()));
            continue;
        }

        if c.is_ascii_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_alphabetic() {
                i += 1;
            }
            out.push(Tok::Ident(chars[start..i].iter().collect()));
            continue;
        }

        match c {
            '(' => out.push(Tok::LPar),
            ')' => out.push(Tok::RPar),
            ',' => out.push(Tok::Virgule),
            _ => {
                if let Some(op) = Op::depuis_char(c) {
                    out.push(Tok::Op(op));
                }
            }
        }
        i += 1;
    }

    out
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Num(txt) => txt.as_str(),
            Tok::Ident(name) => name.as_str(),
            Tok::Op(op) => op.symbole(),
            Tok::LPar => "(",
            Tok::RPar => ")",
            Tok::Virgule => ",",
        };
        out.push(s);
    }
    out.join(" ")
}
