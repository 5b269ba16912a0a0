//! Static instructional copy for the explanation panel and theory sections.
//!
//! A closed enumeration keys a fixed string table; nothing here is computed
//! at runtime.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use crate::state::plot::FocusTopic;

/// Explanation shown for the element the pointer last entered.
#[must_use]
pub fn explanation(topic: FocusTopic) -> &'static str {
    match topic {
        FocusTopic::General => {
            "A support vector machine (SVM) is a supervised learning algorithm used for \
             classification and regression. This plot visualizes an SVM for binary \
             classification."
        }
        FocusTopic::Points => {
            "The points are data samples. Blue and red points belong to the two classes \
             the SVM tries to separate."
        }
        FocusTopic::Hyperplane => {
            "The hyperplane (black line) is the decision boundary that separates the two \
             classes. In 2D it is a line; in higher-dimensional spaces it would be a plane \
             or a hyperplane."
        }
        FocusTopic::Margin => {
            "The margin is the distance between the hyperplane and the closest data points \
             of each class. The SVM maximizes this margin to generalize better."
        }
        FocusTopic::Angle => {
            "The hyperplane's angle determines its orientation. The SVM adjusts this angle \
             to find the best separation between the classes."
        }
        FocusTopic::Interaction => {
            "You can move the hyperplane directly by clicking and dragging on the plot. \
             Try different positions to see how they affect the classification."
        }
    }
}

/// One block of section body copy.
#[derive(Clone, Copy, Debug)]
pub enum Block {
    Paragraph(&'static str),
    Bullets(&'static [&'static str]),
    Steps(&'static [&'static str]),
}

/// One expandable theory section.
#[derive(Clone, Copy, Debug)]
pub struct Section {
    pub title: &'static str,
    pub body: &'static [Block],
}

/// Theory sections rendered by the accordion, in display order.
#[must_use]
pub fn theory_sections() -> &'static [Section] {
    &[
        Section {
            title: "What is a support vector machine?",
            body: &[Block::Paragraph(
                "A support vector machine is a machine learning model that looks for the \
                 hyperplane separating the data into classes with the widest possible \
                 margin. The points closest to that hyperplane, called support vectors, \
                 are the ones that determine the best separation between the classes.",
            )],
        },
        Section {
            title: "Mathematical foundations",
            body: &[
                Block::Paragraph(
                    "SVMs use mathematical optimization to find the optimal separating \
                     hyperplane. For non-linear problems they can apply kernel functions \
                     that project the data into a higher-dimensional space where a linear \
                     separation exists.",
                ),
                Block::Steps(&[
                    "Hyperplane: the boundary that separates the classes in a \
                     multidimensional space.",
                    "Support vectors: the data points closest to the hyperplane, and the \
                     key to its construction.",
                    "Kernel function: transforms non-linear data into a space where it \
                     becomes linearly separable.",
                ]),
                Block::Paragraph(
                    "Together these ideas let SVMs classify even complex or non-linear \
                     data.",
                ),
            ],
        },
        Section {
            title: "How the boundary is built",
            body: &[Block::Steps(&[
                "Identify the hyperplane that best separates the classes with the widest \
                 possible margin.",
                "Use the support vectors to define the hyperplane and maximize the margin \
                 between the classes.",
                "If the data is not linearly separable, apply a kernel to project it into \
                 a higher-dimensional space.",
                "Repeat until the optimal separation is found.",
            ])],
        },
        Section {
            title: "Strengths and weaknesses",
            body: &[
                Block::Paragraph("Strengths:"),
                Block::Bullets(&[
                    "Works well on high-dimensional problems.",
                    "Effective for both linear and non-linear classification.",
                    "Handles complex datasets through kernels.",
                ]),
                Block::Paragraph("Weaknesses:"),
                Block::Bullets(&[
                    "Harder to interpret than models such as decision trees.",
                    "Training is slower on large datasets.",
                    "Kernels can make the model harder to tune and understand.",
                ]),
            ],
        },
        Section {
            title: "Practical applications",
            body: &[
                Block::Paragraph("SVMs are used in a wide range of applications, including:"),
                Block::Bullets(&[
                    "Image classification",
                    "Text analysis and pattern recognition",
                    "Medical diagnosis",
                    "Financial forecasting",
                    "Voice and face recognition",
                ]),
            ],
        },
        Section {
            title: "Comparison with other models",
            body: &[
                Block::Paragraph(
                    "SVMs are one of several models used for classification and \
                     regression. Other common choices include:",
                ),
                Block::Bullets(&[
                    "Logistic regression: suited to binary classification, easier to \
                     interpret.",
                    "K-nearest neighbors: classifies by proximity to known samples.",
                    "Neural networks: more powerful, but need more data and compute.",
                    "Decision trees: easy to interpret, weaker on high-dimensional \
                     problems.",
                ]),
            ],
        },
    ]
}
