/// One formatted attack line. `damage` prints the way the number renders by
/// default, so a whole-number hit reads `12` rather than `12.0`.
pub fn attack_line(attacker: &str, defender: &str, mv: &str, damage: f64, modifier: f64) -> String {
    let mut line = format!("{attacker} used {mv}! {defender} lost {damage} HP!");
    if modifier == 2.0 {
        line.push_str(" It's super effective!");
    } else if modifier == 0.5 {
        line.push_str(" It's not very effective!");
    }
    line
}

/// Running history of a single battle, one line per attack.
#[derive(Clone, Debug, Default)]
pub struct BattleLog {
    lines: Vec<String>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn log_attack(
        &mut self,
        attacker: &str,
        defender: &str,
        mv: &str,
        damage: f64,
        modifier: f64,
    ) {
        self.lines
            .push(attack_line(attacker, defender, mv, damage, modifier));
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}
