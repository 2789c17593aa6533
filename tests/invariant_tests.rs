use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use timebank::Bank;

const ACCOUNTS: [&str; 5] = ["ana", "ben", "cy", "dee", "eve"];

struct Run {
    bank: Bank,
    /// Net of direct deposits and withdrawals; transfers only move money around.
    external_net: u64,
    transfer_ids: Vec<String>,
    last_time: i64,
}

fn random_run(seed: u64, steps: usize) -> Run {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut bank = Bank::new();
    for id in ACCOUNTS {
        bank.create_account(id).unwrap();
    }
    let mut external_net = 0u64;
    let mut transfer_ids = Vec::new();
    let mut time = 1000i64;

    for _ in 0..steps {
        time += rng.gen_range(1..100);
        let account = ACCOUNTS[rng.gen_range(0..ACCOUNTS.len())];
        let other = ACCOUNTS[rng.gen_range(0..ACCOUNTS.len())];
        let amount = rng.gen_range(-5..300);

        match rng.gen_range(0..7) {
            0 => {
                if bank.deposit(account, amount, time).is_ok() {
                    external_net += amount as u64;
                }
            }
            1 => {
                if bank.withdraw(account, amount, time).is_ok() {
                    external_net -= amount as u64;
                }
            }
            2 => {
                let ttl = rng.gen_range(-10..500);
                if let Ok(id) = bank.create_transfer(account, other, amount, time, ttl) {
                    transfer_ids.push(id);
                }
            }
            3 if !transfer_ids.is_empty() => {
                let id = &transfer_ids[rng.gen_range(0..transfer_ids.len())];
                let _ = bank.accept_transfer(id, time);
            }
            4 if !transfer_ids.is_empty() => {
                let id = &transfer_ids[rng.gen_range(0..transfer_ids.len())];
                bank.transfer_status(id, time).unwrap();
            }
            5 => {
                let ttl = rng.gen_range(0..500);
                let at = time + rng.gen_range(0..300);
                let _ = bank.schedule_transfer(account, other, amount, at, ttl);
            }
            _ => {
                let created = bank.process_scheduled_transfers(time);
                transfer_ids.extend(created);
            }
        }
    }

    Run {
        bank,
        external_net,
        transfer_ids,
        last_time: time,
    }
}

fn log_net(bank: &Bank, account: &str, at: i64) -> i64 {
    bank.transaction_history(account, at)
        .unwrap()
        .iter()
        .map(|line| {
            let mut parts = line.split(' ');
            let kind = parts.next().unwrap();
            let amount: i64 = parts.next().unwrap().parse().unwrap();
            if kind == "deposit" { amount } else { -amount }
        })
        .sum()
}

#[test]
fn test_money_is_conserved() {
    for seed in 0..20 {
        let run = random_run(seed, 400);
        let held: u64 = ACCOUNTS
            .iter()
            .map(|id| run.bank.balance(id).unwrap() + run.bank.escrowed_balance(id).unwrap())
            .sum();
        assert_eq!(held, run.external_net, "seed {seed}");
    }
}

#[test]
fn test_balance_matches_realized_log() {
    for seed in 0..20 {
        let run = random_run(seed, 400);
        for id in ACCOUNTS {
            let balance = run.bank.balance(id).unwrap() as i64;
            let escrowed = run.bank.escrowed_balance(id).unwrap() as i64;
            assert_eq!(
                balance + escrowed,
                log_net(&run.bank, id, i64::MAX),
                "seed {seed}, account {id}"
            );
        }
    }
}

#[test]
fn test_every_transfer_resolves_exactly_once() {
    for seed in 0..20 {
        let mut run = random_run(seed, 400);
        let far_future = run.last_time + 1_000_000;
        for id in &run.transfer_ids {
            run.bank.transfer_status(id, far_future).unwrap();
        }
        for id in ACCOUNTS {
            assert_eq!(run.bank.escrowed_balance(id).unwrap(), 0, "seed {seed}");
            assert_eq!(
                run.bank.balance(id).unwrap() as i64,
                log_net(&run.bank, id, i64::MAX),
                "seed {seed}, account {id}"
            );
        }
    }
}

#[test]
fn test_ranking_is_sorted_and_sized() {
    for seed in 0..10 {
        let run = random_run(seed, 300);
        for n in [0, 1, 3, 5, 8] {
            let top = run.bank.top_accounts_by_volume(n, run.last_time);
            assert_eq!(top.len(), n.min(ACCOUNTS.len()));

            let volumes: Vec<(u64, &String)> = top
                .iter()
                .map(|id| (run.bank.transaction_volume(id, run.last_time).unwrap(), id))
                .collect();
            for pair in volumes.windows(2) {
                let (v1, id1) = pair[0];
                let (v2, id2) = pair[1];
                assert!(v1 > v2 || (v1 == v2 && id1 < id2), "seed {seed}: {pair:?}");
            }
        }
    }
}

#[test]
fn test_processing_never_repeats_an_id() {
    for seed in 0..10 {
        let run = random_run(seed, 400);
        let mut seen = std::collections::HashSet::new();
        for id in &run.transfer_ids {
            assert!(seen.insert(id.clone()), "seed {seed}: {id} returned twice");
        }
    }
}
