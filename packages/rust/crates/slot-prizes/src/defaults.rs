//! Built-in prize set loaded at process start.

use crate::prize::Prize;

/// The ordered prize set the game ships with. Weights total 100.
#[must_use]
pub fn default_prizes() -> Vec<Prize> {
    vec![
        Prize::new(1, "Vale R$ 500", "💰", 5.0, "from-yellow-400 to-yellow-600"),
        Prize::new(2, "Vale R$ 300", "🎁", 8.0, "from-red-400 to-red-600"),
        Prize::new(3, "Vale R$ 200", "🎄", 10.0, "from-green-400 to-green-600"),
        Prize::new(4, "Vale R$ 100", "⭐", 15.0, "from-blue-400 to-blue-600"),
        Prize::new(5, "Desconto 50%", "🎅", 12.0, "from-red-500 to-pink-600"),
        Prize::new(6, "Desconto 30%", "❄️", 15.0, "from-cyan-400 to-blue-500"),
        Prize::new(7, "Desconto 20%", "🔔", 15.0, "from-purple-400 to-purple-600"),
        Prize::new(8, "Brinde Especial", "🎊", 10.0, "from-orange-400 to-red-500"),
        Prize::new(9, "Tente Novamente", "🎯", 10.0, "from-gray-400 to-gray-600"),
    ]
}
