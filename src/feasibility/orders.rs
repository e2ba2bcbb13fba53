//! Lazy enumeration of topological orders.

/// Iterator over every topological order of a DAG, one order at a time.
///
/// The enumerator keeps a single partial order plus, for each depth, the
/// next node to try there. Advancing backtracks through that stack, so memory
/// stays O(n + e) no matter how many orders the graph admits, and dropping the
/// iterator stops the search. Orders are produced in lexicographic order of
/// node index.
///
/// On a graph with a cycle the iterator yields nothing.
#[derive(Debug, Clone)]
pub struct TopologicalOrders {
    successors: Vec<Vec<usize>>,
    in_degree: Vec<usize>,
    placed: Vec<bool>,
    order: Vec<usize>,
    /// `cursors[d]` is the smallest node not yet tried at depth `d`.
    cursors: Vec<usize>,
    done: bool,
}

impl TopologicalOrders {
    /// Creates the enumerator from successor lists indexed by node.
    pub fn new(successors: Vec<Vec<usize>>) -> Self {
        let n = successors.len();
        let mut in_degree = vec![0; n];
        for succ in successors.iter().flatten() {
            in_degree[*succ] += 1;
        }
        Self {
            successors,
            in_degree,
            placed: vec![false; n],
            order: Vec::with_capacity(n),
            cursors: vec![0],
            done: false,
        }
    }

    fn push(&mut self, node: usize) {
        self.placed[node] = true;
        self.order.push(node);
        for &succ in &self.successors[node] {
            self.in_degree[succ] -= 1;
        }
        self.cursors.push(0);
    }

    fn pop(&mut self) {
        self.cursors.pop();
        if let Some(node) = self.order.pop() {
            self.placed[node] = false;
            for &succ in &self.successors[node] {
                self.in_degree[succ] += 1;
            }
        }
    }

    fn next_ready(&self, from: usize) -> Option<usize> {
        (from..self.placed.len()).find(|&v| !self.placed[v] && self.in_degree[v] == 0)
    }
}

impl Iterator for TopologicalOrders {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let n = self.placed.len();
        if n == 0 {
            self.done = true;
            return Some(Vec::new());
        }
        // Undo the tail of the order returned last time.
        if self.order.len() == n {
            self.pop();
        }

        loop {
            let depth = self.order.len();
            match self.next_ready(self.cursors[depth]) {
                Some(node) => {
                    self.cursors[depth] = node + 1;
                    self.push(node);
                    if self.order.len() == n {
                        return Some(self.order.clone());
                    }
                }
                None if depth == 0 => {
                    self.done = true;
                    return None;
                }
                None => self.pop(),
            }
        }
    }
}
