use super::*;
use dialoguer::Input;

/// A person at the terminal.
///
/// Heap numbers are 1-based on screen. Non-numeric or illegal input is
/// rejected and re-prompted.
#[derive(Debug, Default, Clone, Copy)]
pub struct Human;

impl Human {
    pub fn decide(&self, heaps: &Heaps) -> anyhow::Result<Take> {
        let heap = Input::<String>::new()
            .with_prompt(format!("Heap (1-{})", heaps.len()))
            .validate_with(|i: &String| -> Result<(), String> { Self::heap(heaps, i).map(|_| ()) })
            .report(false)
            .interact_text()?;
        let heap = Self::heap(heaps, &heap).map_err(anyhow::Error::msg)?;
        let amount = Input::<String>::new()
            .with_prompt(format!("Sticks to take (1-{})", heaps.size(heap)))
            .validate_with(|i: &String| -> Result<(), String> {
                Self::take(heaps, heap, i).map(|_| ())
            })
            .report(false)
            .interact_text()?;
        Self::take(heaps, heap, &amount).map_err(anyhow::Error::msg)
    }
    /// Parses a 1-based heap number into a zero-based index of a
    /// non-empty heap.
    pub fn heap(heaps: &Heaps, input: &str) -> Result<usize, String> {
        let n = input
            .trim()
            .parse::<usize>()
            .map_err(|_| String::from("Enter a NUMBER"))?;
        if n < 1 || n > heaps.len() {
            return Err(format!("Choose a heap from 1 to {}", heaps.len()));
        }
        if heaps.size(n - 1) == 0 {
            return Err(format!("Heap {} is empty", n));
        }
        Ok(n - 1)
    }
    /// Parses an amount for the heap at `heap`.
    pub fn take(heaps: &Heaps, heap: usize, input: &str) -> Result<Take, String> {
        let amount = input
            .trim()
            .parse::<Sticks>()
            .map_err(|_| String::from("Enter a NUMBER"))?;
        heaps.legal(heap, amount).map_err(|e| e.to_string())
    }
}
