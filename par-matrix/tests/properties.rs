use par_matrix::partition;
use par_matrix::{Config, Engine, Error, Matrix};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ORDERS: [usize; 5] = [1, 2, 3, 8, 33];
const THREADS: [usize; 4] = [1, 2, 4, 7];

fn engine(threads: usize) -> Engine {
    Engine::new(Config::new(threads).unwrap())
}

fn random_matrix(rng: &mut StdRng, order: usize, bound: u32) -> Matrix {
    let cells = (0..order * order).map(|_| rng.gen_range(0..bound)).collect();
    Matrix::from_vec(order, cells).unwrap()
}

#[test]
fn test_partition_ranges_cover_domain() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..200 {
        let domain = rng.gen_range(0..500);
        let workers = rng.gen_range(1..40);

        let mut covered = 0;
        for worker in 0..workers {
            let range = partition::work_range(domain, workers, worker);
            assert_eq!(range.start, covered);
            covered = range.end;
        }
        assert_eq!(covered, domain);
    }
}

// Every matrix-valued and scalar-valued operation on the same inputs.
fn run_all(e: &Engine, a: &Matrix, b: &Matrix) -> (Vec<Matrix>, Vec<u64>) {
    let order = a.order();
    let first = a.as_slice()[0];

    let matrices = vec![
        e.clone_matrix(a).unwrap(),
        e.scalar_add(a, 17).unwrap(),
        e.scalar_mul(a, 3).unwrap(),
        e.add(a, b).unwrap(),
        e.reverse(a).unwrap(),
        e.transpose(a).unwrap(),
        e.multiply(a, b).unwrap(),
        e.power(a, 6).unwrap(),
        e.uniform(order, 5).unwrap(),
        e.sequence(order, 3, 7).unwrap(),
    ];
    let scalars = vec![
        e.sum(a).unwrap(),
        e.trace(a).unwrap(),
        u64::from(e.min(a).unwrap()),
        u64::from(e.max(a).unwrap()),
        e.frequency(a, first).unwrap() as u64,
    ];
    (matrices, scalars)
}

#[test]
fn test_results_independent_of_thread_count() {
    let mut rng = StdRng::seed_from_u64(2);
    for order in ORDERS {
        let a = random_matrix(&mut rng, order, u32::MAX);
        let b = random_matrix(&mut rng, order, u32::MAX);
        let reference = run_all(&engine(1), &a, &b);

        for threads in THREADS {
            let outputs = run_all(&engine(threads), &a, &b);
            assert_eq!(outputs, reference, "order {order}, {threads} threads");
        }
    }
}

#[test]
fn test_sum_matches_naive() {
    let mut rng = StdRng::seed_from_u64(3);
    for order in ORDERS {
        let a = random_matrix(&mut rng, order, u32::MAX);
        let naive: u64 = a.as_slice().iter().map(|&v| u64::from(v)).sum();
        for threads in THREADS {
            let sum = engine(threads).sum(&a).unwrap();
            assert_eq!(sum, naive, "order {order}, {threads} threads");
        }
    }
}

#[test]
fn test_power_laws() {
    let mut rng = StdRng::seed_from_u64(4);
    for order in [1, 2, 3, 8] {
        let a = random_matrix(&mut rng, order, 16);
        for threads in THREADS {
            let e = engine(threads);
            assert_eq!(e.power(&a, 0).unwrap(), Matrix::identity(order).unwrap());
            assert_eq!(e.power(&a, 1).unwrap(), e.clone_matrix(&a).unwrap());

            for (e1, e2) in [(0, 3), (1, 1), (2, 5), (4, 3), (7, 9)] {
                let whole = e.power(&a, e1 + e2).unwrap();
                let split = e
                    .multiply(&e.power(&a, e1).unwrap(), &e.power(&a, e2).unwrap())
                    .unwrap();
                assert_eq!(
                    whole, split,
                    "order {order}, {threads} threads, {e1}+{e2}"
                );
            }
        }
    }
}

#[test]
fn test_involutions() {
    let mut rng = StdRng::seed_from_u64(5);
    for order in ORDERS {
        let a = random_matrix(&mut rng, order, u32::MAX);
        for threads in THREADS {
            let e = engine(threads);
            assert_eq!(e.transpose(&e.transpose(&a).unwrap()).unwrap(), a);
            assert_eq!(e.reverse(&e.reverse(&a).unwrap()).unwrap(), a);
        }
    }
}

#[test]
fn test_scenarios() {
    let e = engine(4);

    let identity = Matrix::identity(2).unwrap();
    assert_eq!(e.power(&identity, 4).unwrap().as_slice(), &[1, 0, 0, 1]);

    let a = Matrix::from_rows(&[[1u32, 2], [3, 4]]).unwrap();
    let b = Matrix::from_rows(&[[5u32, 6], [7, 8]]).unwrap();
    assert_eq!(e.multiply(&a, &b).unwrap().as_slice(), &[19, 22, 43, 50]);
    assert_eq!(e.scalar_add(&a, 4).unwrap().as_slice(), &[5, 6, 7, 8]);

    let ones = Matrix::from_rows(&[[1u32, 1], [1, 1]]).unwrap();
    assert_eq!(e.frequency(&ones, 1).unwrap(), 4);
}

#[test]
fn test_invalid_configuration_rejected() {
    assert!(matches!(Config::new(0), Err(Error::InvalidThreadCount(0))));
    assert!(matches!(Matrix::zeros(0), Err(Error::InvalidOrder(0))));

    let mut e = engine(2);
    assert!(e.set_threads(0).is_err());
    assert_eq!(e.threads(), 2);
    e.set_threads(5).unwrap();
    assert_eq!(e.threads(), 5);
    assert_eq!(e.config(), Config::new(5).unwrap());
}
