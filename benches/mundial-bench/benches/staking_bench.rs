//! Staking ledger benchmarks.
//!
//! Measures:
//! - Reward projection throughput for N positions
//! - Stake, accrual, and claim throughput across account counts

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mundial_bench::helpers::{empty_ledger, owner_names, populated_ledger, BASE_TIMESTAMP};
use mundial_staking_ledger::{projected_reward, Tier, SECONDS_PER_DAY, UNITS_PER_TOKEN};
use rand::Rng;

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_reward_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("staking/reward_projection");

    for &n_positions in &[1_000u64, 10_000, 100_000] {
        group.throughput(Throughput::Elements(n_positions));
        group.bench_with_input(
            BenchmarkId::new("positions", n_positions),
            &n_positions,
            |b, &n| {
                let mut rng = rand::rng();
                let positions: Vec<(u64, u64)> = (0..n)
                    .map(|_| {
                        let staked = rng.random_range(100..5_000u64) * UNITS_PER_TOKEN;
                        (staked, Tier::for_amount(staked).apy_bps())
                    })
                    .collect();

                b.iter(|| {
                    // Project one day of rewards for every position.
                    let mut total = 0u64;
                    for &(staked, apy_bps) in &positions {
                        total = total
                            .saturating_add(projected_reward(staked, apy_bps, SECONDS_PER_DAY));
                    }
                    total
                });
            },
        );
    }
    group.finish();
}

fn bench_stake(c: &mut Criterion) {
    let mut group = c.benchmark_group("staking/stake");
    group.sample_size(10);

    for &n_accounts in &[1_000usize, 10_000] {
        group.throughput(Throughput::Elements(n_accounts as u64));
        group.bench_with_input(
            BenchmarkId::new("accounts", n_accounts),
            &n_accounts,
            |b, &n| {
                let owners = owner_names(n);
                b.iter_batched(
                    || empty_ledger(),
                    |(ledger, _clock)| {
                        for owner in &owners {
                            ledger.stake(owner, 550 * UNITS_PER_TOKEN).unwrap();
                        }
                    },
                    criterion::BatchSize::SmallInput,
                );
            },
        );
    }
    group.finish();
}

fn bench_accrue(c: &mut Criterion) {
    let mut group = c.benchmark_group("staking/accrue");
    group.sample_size(10);

    for &n_accounts in &[1_000usize, 10_000] {
        group.throughput(Throughput::Elements(n_accounts as u64));
        group.bench_with_input(
            BenchmarkId::new("accounts", n_accounts),
            &n_accounts,
            |b, &n| {
                b.iter_batched(
                    || populated_ledger(n),
                    |(ledger, _clock, owners)| {
                        // Project one day of rewards for every account.
                        let now = BASE_TIMESTAMP + SECONDS_PER_DAY;
                        let mut total = 0u64;
                        for owner in &owners {
                            total =
                                total.saturating_add(ledger.accrue(owner, now).unwrap().accrued);
                        }
                        total
                    },
                    criterion::BatchSize::SmallInput,
                );
            },
        );
    }
    group.finish();
}

fn bench_claim(c: &mut Criterion) {
    let mut group = c.benchmark_group("staking/claim");
    group.sample_size(10);

    let n_accounts = 10_000usize;
    group.throughput(Throughput::Elements(n_accounts as u64));
    group.bench_function("weekly_cycle", |b| {
        b.iter_batched(
            || {
                // Setup: a week of rewards pending on every account.
                let (ledger, _clock, owners) = populated_ledger(n_accounts);
                let now = BASE_TIMESTAMP + 7 * SECONDS_PER_DAY;
                for owner in &owners {
                    ledger.accrue(owner, now).unwrap();
                }
                (ledger, owners)
            },
            |(ledger, owners)| {
                let mut total = 0u64;
                for owner in &owners {
                    total = total.saturating_add(ledger.claim(owner).unwrap().amount);
                }
                total
            },
            criterion::BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_tier_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("staking/tier_derivation");

    let n_amounts = 100_000u64;
    group.throughput(Throughput::Elements(n_amounts));
    group.bench_function("for_amount", |b| {
        let mut rng = rand::rng();
        let amounts: Vec<u64> = (0..n_amounts)
            .map(|_| rng.random_range(0..10_000 * UNITS_PER_TOKEN))
            .collect();

        b.iter(|| {
            // Count the Gold-and-above accounts.
            amounts
                .iter()
                .filter(|&&amount| Tier::for_amount(amount) >= Tier::Gold)
                .count()
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_reward_projection,
    bench_stake,
    bench_accrue,
    bench_claim,
    bench_tier_derivation,
);
criterion_main!(benches);
