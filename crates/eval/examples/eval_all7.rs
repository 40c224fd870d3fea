// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all7
// ...
// Total hands      133784560
// Elapsed:         ...
// Hands/sec:       ...
//
// High Card:       23294460
// One  Pair:       58627800
// Two Pairs:       31433400
// Three of a Kind: 6461620
// Straight:        6180020
// Flush:           4047644
// Full House:      3473184
// Four of a Kind:  224848
// Straight Flush:  41584
// ```

use std::time::Instant;

use showdown_eval::*;

const EXPECTED: [usize; 9] = [
    23294460, 58627800, 31433400, 6461620, 6180020, 4047644, 3473184, 224848, 41584,
];

#[rustfmt::skip]
fn main() {
    // Resolve all 133M hands.
    let now = Instant::now();
    let mut counts = [0usize; 9];

    Deck::default().for_each(SevenCardHand::SIZE, |hand| {
        match resolve(hand) {
            Ok((eval, _)) => counts[eval.category() as usize] += 1,
            Err(e) => panic!("{e}"),
        }
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    println!("High Card:       {}", counts[HandCategory::HighCard as usize]);
    println!("One  Pair:       {}", counts[HandCategory::Pair as usize]);
    println!("Two Pairs:       {}", counts[HandCategory::TwoPair as usize]);
    println!("Three of a Kind: {}", counts[HandCategory::ThreeOfAKind as usize]);
    println!("Straight:        {}", counts[HandCategory::Straight as usize]);
    println!("Flush:           {}", counts[HandCategory::Flush as usize]);
    println!("Full House:      {}", counts[HandCategory::FullHouse as usize]);
    println!("Four of a Kind:  {}", counts[HandCategory::FourOfAKind as usize]);
    println!("Straight Flush:  {}", counts[HandCategory::StraightFlush as usize]);

    assert_eq!(counts, EXPECTED, "unexpected category counts");
}
