#[cfg(test)]
mod pool_tests {
    use vault_envelope::constants::MIN_ITERATIONS;
    use vault_envelope::{
        ConfigError, DecryptError, Envelope, EnvelopeConfig, PoolConfig, PoolError, Task,
        TaskError, WorkerPool,
    };

    fn fast() -> Envelope {
        Envelope::new(EnvelopeConfig { iterations: MIN_ITERATIONS, ..EnvelopeConfig::default() }).unwrap()
    }

    fn pool(workers: usize) -> WorkerPool {
        WorkerPool::init(&PoolConfig { workers, queue_depth: 4 }, fast()).unwrap()
    }

    #[test]
    fn init_spawns_requested_workers() {
        let p = pool(3);
        assert_eq!(p.workers(), 3);
        p.shutdown();
    }

    #[test]
    fn auto_sizing_leaves_at_least_one_worker() {
        let p = WorkerPool::init(&PoolConfig::default(), fast()).unwrap();
        assert!(p.workers() >= 1);
    }

    #[test]
    fn zero_queue_depth_rejected() {
        let err = WorkerPool::init(&PoolConfig { workers: 1, queue_depth: 0 }, fast()).err().unwrap();
        assert!(matches!(err, PoolError::Config(ConfigError::ZeroQueueDepth)));
    }

    #[test]
    fn dispatch_is_round_robin() {
        let p = pool(3);
        let workers: Vec<usize> = (0..6)
            .map(|i| p.dispatch(Task::encrypt(format!("msg {i}"), "pw")).unwrap())
            .map(|t| t.worker())
            .collect();
        assert_eq!(workers, vec![0, 1, 2, 0, 1, 2]);
    }

    #[test]
    fn encrypt_then_decrypt_through_pool() {
        let p = pool(2);
        let tickets: Vec<_> = (0..8)
            .map(|i| p.dispatch(Task::encrypt(format!("secret {i}"), "pw")).unwrap())
            .collect();
        let tokens: Vec<String> = tickets.into_iter().map(|t| t.wait().unwrap()).collect();

        let opened: Vec<String> = tokens
            .iter()
            .map(|tok| p.dispatch(Task::decrypt(tok.clone(), "pw")).unwrap())
            .map(|t| t.wait().unwrap())
            .collect();

        let expected: Vec<String> = (0..8).map(|i| format!("secret {i}")).collect();
        assert_eq!(opened, expected);
        p.shutdown();
    }

    #[test]
    fn concurrent_tasks_get_distinct_salts() {
        let p = pool(4);
        let tickets: Vec<_> = (0..4).map(|_| p.dispatch(Task::encrypt("same", "pw")).unwrap()).collect();
        let mut tokens: Vec<String> = tickets.into_iter().map(|t| t.wait().unwrap()).collect();
        tokens.sort();
        tokens.dedup();
        assert_eq!(tokens.len(), 4);
    }

    #[test]
    fn decrypt_failure_stays_opaque() {
        let p = pool(1);
        let token = p.dispatch(Task::encrypt("secret", "right")).unwrap().wait().unwrap();
        let err = p.dispatch(Task::decrypt(token, "wrong")).unwrap().wait().unwrap_err();
        assert!(matches!(err, TaskError::Decrypt(DecryptError)));
        assert_eq!(err.to_string(), "decryption failed");
    }

    #[test]
    fn shutdown_drains_queued_work() {
        let p = pool(1);
        let tickets: Vec<_> = (0..4).map(|i| p.dispatch(Task::encrypt(format!("{i}"), "pw")).unwrap()).collect();
        p.shutdown();
        for t in tickets {
            assert!(t.wait().is_ok());
        }
    }

    #[test]
    fn drop_joins_workers() {
        let ticket = {
            let p = pool(2);
            p.dispatch(Task::encrypt("dropped", "pw")).unwrap()
        };
        assert!(ticket.wait().is_ok());
    }

    #[test]
    fn task_debug_redacts_secrets() {
        let t = Task::encrypt("plaintext", "hunter2");
        let shown = format!("{t:?}");
        assert!(!shown.contains("hunter2"));
        assert!(!shown.contains("plaintext"));
    }
}
