//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - sur une expression bien formée, seule l’erreur "résultat non fini" est attendue
//! - invariant clé : un texte rendu par la façade se ré-évalue à l’identique

use std::time::{Duration, Instant};

use super::erreur::ErreurEval;
use super::eval_expression;
use super::format::DECIMALES_DEFAUT;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    let entier = rng.pick(100);
    let s = if rng.coin() {
        format!("{entier}.{}", rng.pick(1000))
    } else {
        format!("{entier}")
    };
    // moins unaire de temps en temps
    if rng.pick(4) == 0 {
        format!("-{s}")
    } else {
        s
    }
}

fn gen_atom(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 | 1 | 2 => gen_nombre(rng),
        3 => "pi".to_string(),
        4 => "e".to_string(),
        _ => "PI".to_string(),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atom(rng);
    }

    let a = gen_expr(rng, depth - 1);
    match rng.pick(12) {
        0 => gen_atom(rng),
        1 => format!("({a}+{})", gen_expr(rng, depth - 1)),
        2 => format!("({a}-{})", gen_expr(rng, depth - 1)),
        3 => format!("({a}*{})", gen_expr(rng, depth - 1)),
        4 => format!("({a}/{})", gen_expr(rng, depth - 1)),
        5 => format!("({a}%{})", gen_expr(rng, depth - 1)),
        6 => format!("pow({a}, {})", gen_nombre(rng)),
        7 => format!("sin({a})"),
        8 => format!("cos({a})"),
        9 => format!("sqrt({a})"),
        10 => format!("ln({a})"),
        _ => format!("log({a})"),
    }
}

fn gen_bruit(rng: &mut Rng, len: usize) -> String {
    const ALPHABET: &[char] = &[
        '0', '1', '9', '.', '+', '-', '*', '/', '%', '^', '(', ')', ',', ' ', 'e', 'p', 'i', 's',
        'n', 'q', 'r', 't', 'x', '×', '÷', '−', '@', '#',
    ];
    (0..len)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Helper somme balancée ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_expressions_bien_formees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);

        match eval_expression(&expr, DECIMALES_DEFAUT) {
            Ok(e) => {
                assert!(e.valeur.is_finite(), "expr={expr:?}");
                // le texte rendu est lui-même une expression valide, de même rendu
                let relu = eval_expression(&e.texte, DECIMALES_DEFAUT)
                    .unwrap_or_else(|err| panic!("expr={expr:?} texte={:?} err={err}", e.texte));
                assert_eq!(relu.texte, e.texte, "expr={expr:?}");
                seen_ok += 1;
            }
            Err(err) => {
                assert_eq!(err, ErreurEval::ResultatNonFini, "expr={expr:?}");
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 20, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_bruit_sans_panique_et_deterministe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..400 {
        budget(t0, max);

        let len = rng.pick(24) as usize;
        let brut = gen_bruit(&mut rng, len);

        // même entrée => même sortie
        let r1 = eval_expression(&brut, DECIMALES_DEFAUT);
        let r2 = eval_expression(&brut, DECIMALES_DEFAUT);
        assert_eq!(r1, r2, "brut={brut:?}");

        if let Ok(e) = r1 {
            assert!(e.valeur.is_finite(), "brut={brut:?}");
        }
    }
}

#[test]
fn fuzz_safe_somme_balancee() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = somme_balancee("1/2", 800);
    let e = eval_expression(&expr, DECIMALES_DEFAUT).unwrap_or_else(|err| panic!("err: {err}"));
    budget(t0, max);

    // 800*(1/2) = 400
    assert_eq!(e.texte, "400");
}

#[test]
fn fuzz_safe_imbrication_profonde() {
    // pile Vec : pas de récursion, donc pas de débordement
    let n = 5_000;
    let expr = format!("{}7{}", "(".repeat(n), ")".repeat(n));
    let e = eval_expression(&expr, DECIMALES_DEFAUT).unwrap_or_else(|err| panic!("err: {err}"));
    assert_eq!(e.texte, "7");
}
