//! Static decoration content attached to directory records.
//!
//! Every table is non-empty; the enrichment functions pick entries by
//! wrapping index so the tables may be shorter than the data they decorate.

pub const TOPICS: &[&str] = &[
    "Virtual Reality",
    "Augmented Reality",
    "Mixed Reality",
    "AI in VR",
    "Metaverse",
    "AR Gaming",
    "VR Healthcare",
    "AR in Education",
    "Haptic Feedback",
    "Spatial Computing",
    "Neural Interfaces",
    "Holographic Displays",
    "5G and XR",
    "Digital Twins",
    "Quantum Computing",
    "Edge AI",
    "Blockchain",
    "IoT",
    "Robotics",
    "Wearable Tech",
];

pub const POST_TITLES: &[&str] = &[
    "The Future of Immersive Learning in VR Classrooms",
    "How AR is Revolutionizing Retail Shopping Experiences",
    "Mixed Reality: Blending Digital and Physical Worlds",
    "Neural Interfaces: The Next Frontier for VR Interaction",
    "Enterprise Applications of AR in Manufacturing",
    "The Metaverse Economy: Digital Assets and Virtual Real Estate",
    "VR Therapy: Treating PTSD and Phobias with Immersive Technology",
    "Haptic Gloves: Bringing Touch Sensation to Virtual Reality",
    "AR Navigation: The End of Traditional GPS?",
    "Social VR: Building Communities in Virtual Spaces",
    "Holographic Meetings: The Future of Remote Collaboration",
    "Volumetric Capture for Immersive Content Creation",
    "Eye Tracking in VR: Understanding User Attention",
    "AR Cloud: The Persistent Digital Layer Over Our World",
    "VR Fitness: Working Out in Virtual Environments",
    "Spatial Audio: Creating Immersive Soundscapes in VR",
    "Digital Twins: Virtual Replicas for Real-World Problem Solving",
    "WebXR: Making VR and AR Accessible Through Browsers",
    "AI-Generated Virtual Environments: Procedural Worlds",
    "The Ethics of Extended Reality: Privacy and Digital Rights",
    "Quantum Computing's Impact on VR Simulation Capabilities",
    "Edge AI: Powering Next-Generation AR Experiences",
    "Blockchain in Virtual Economies: NFTs and Digital Ownership",
    "IoT and AR: Connected Objects in Augmented Spaces",
    "Wearable AR: Beyond Headsets to Everyday Devices",
];

pub const POST_BODIES: &[&str] = &[
    "Virtual reality is transforming how we learn, work, and play. With immersive environments that can simulate any scenario, VR provides unprecedented opportunities for training, education, and entertainment. Recent advancements in haptic feedback technology now allow users to feel virtual objects, adding another dimension to the experience.",
    "Augmented reality overlays digital information onto the physical world, enhancing our perception and interaction with our surroundings. From AR navigation that guides us through cities to shopping applications that let us try products virtually, AR is becoming an integral part of our daily lives. The development of AR glasses promises to make this technology even more seamless and ubiquitous.",
    "The metaverse represents the convergence of physical and digital realities, creating persistent virtual worlds where people can interact, work, and socialize. As companies invest billions in building metaverse platforms, questions about digital identity, ownership, and governance become increasingly important. The economic potential of virtual real estate and digital assets is creating new markets and opportunities.",
    "Neural interfaces promise direct communication between our brains and computers, potentially revolutionizing how we interact with virtual and augmented reality. By interpreting neural signals, these interfaces could allow us to control virtual objects with our thoughts or experience sensations from digital environments. While still in early development, the implications for accessibility and immersion are profound.",
    "Mixed reality blends elements of both VR and AR, allowing virtual objects to interact with the physical world in real-time. This technology is finding applications in fields ranging from architecture and design to medical training and remote collaboration. As MR devices become more powerful and compact, we're seeing new use cases emerge across industries.",
    "Spatial computing moves beyond traditional interfaces to understand and respond to the three-dimensional world around us. By mapping physical spaces and tracking objects within them, spatial computing enables more natural interactions with digital content. This approach is fundamental to advanced AR and VR applications, creating experiences that feel intuitive and responsive.",
    "Digital twins are virtual replicas of physical objects, processes, or systems that can be used for simulation, analysis, and optimization. In manufacturing, digital twins allow engineers to test changes virtually before implementing them in the real world. In urban planning, they help model the impact of new developments on city infrastructure and services.",
    "Haptic technology recreates the sense of touch through forces, vibrations, or motions, adding a crucial dimension to virtual experiences. Advanced haptic gloves can simulate the texture, weight, and resistance of virtual objects, making interactions in VR feel remarkably real. This technology is particularly valuable for training simulations in medicine, manufacturing, and other fields requiring fine motor skills.",
    "Edge AI processes data locally on devices rather than in the cloud, enabling faster response times and greater privacy for AR and VR applications. This approach is essential for real-time experiences like AR navigation or VR gaming, where even slight delays can break immersion. As mobile processors become more powerful, we're seeing increasingly sophisticated AI capabilities in standalone headsets.",
    "Volumetric capture records subjects from multiple angles to create three-dimensional models that can be viewed from any perspective in VR or AR. This technology is transforming entertainment, allowing for more realistic virtual performances and immersive storytelling. It's also finding applications in medicine, sports analysis, and historical preservation.",
];

pub const POST_IMAGES: &[&str] = &[
    "/vr.png",
    "/AR.jpg",
    "/Mixed Reality.jpg",
    "/Neural Interfaces.jpg",
    "/Enterprise AR.jpg",
    "/Metaverse.jpeg",
    "/VR Theraphy.png",
    "/Haptic Technology.png",
    "/AR-navigagtion.jpg",
    "/social-vr.jpg",
    "/holographic-meeting.jpg",
    "/volumetric-capture.jpg",
    "/eye-tracking-vr.jpg",
    "/ae-cloud.avif",
    "/vr-fitness.jpg",
    "/spatial-audio.avif",
    "/digital-twins.jpg",
    "/webxr.jpg",
    "/ai-virtual-environments.avif",
    "/xr-ethics.jpg",
];

pub const PROFILE_IMAGES: &[&str] = &[
    "/avatar1.png",
    "/avatar2.png",
    "/avatar3.png",
    "/avatar4.png",
    "/avatar5.png",
    "/avatar6.png",
    "/avatar7.png",
    "/avatar8.png",
    "/avatar9.jpg",
    "/avatar10.jpg",
];

pub const USER_BIOS: &[&str] = &[
    "VR developer specializing in immersive educational experiences. Working on next-gen learning platforms that make complex subjects accessible through virtual reality.",
    "AR researcher exploring the intersection of augmented reality and urban planning. Creating tools to visualize city development in real-time overlays.",
    "Metaverse architect designing virtual spaces for collaboration and social interaction. Passionate about creating inclusive digital environments.",
    "XR UX designer focused on natural interaction patterns in mixed reality. Advocate for accessible design in immersive technologies.",
    "Neural interface engineer working on brain-computer interfaces for VR control. Exploring the future of thought-based interaction.",
    "Digital twin specialist creating virtual replicas of physical systems for simulation and optimization. Applying this technology to sustainable urban planning.",
    "Haptic technology researcher developing touch feedback systems for virtual reality. Making digital experiences more tangible and intuitive.",
    "Spatial computing developer building applications that understand and respond to physical environments. Creating AR tools for industrial applications.",
    "Volumetric capture artist specializing in creating 3D recordings of performances for VR experiences. Pushing the boundaries of immersive storytelling.",
    "AR cloud researcher working on persistent digital layers that can be shared across devices. Building the infrastructure for the AR-enabled future.",
];

pub const INTERESTS: &[&[&str]] = &[
    &["Virtual Reality", "Education Technology", "Haptic Feedback", "3D Modeling"],
    &["Augmented Reality", "Urban Planning", "Computer Vision", "UX Design"],
    &["Metaverse", "Social VR", "Digital Economy", "Virtual Architecture"],
    &["Mixed Reality", "Interaction Design", "Accessibility", "Spatial Interfaces"],
    &["Neural Interfaces", "Brain-Computer Interaction", "AI", "Ethics in Technology"],
    &["Digital Twins", "Simulation", "IoT", "Sustainable Technology"],
    &["Haptic Technology", "Wearable Devices", "Sensory Augmentation", "Robotics"],
    &["Spatial Computing", "Computer Vision", "SLAM", "Industrial AR"],
    &["Volumetric Capture", "3D Reconstruction", "Immersive Media", "Performance Art"],
    &["AR Cloud", "Persistent AR", "Edge Computing", "Location-Based Services"],
];

/// Avatars handed out when a directory member signs in.
pub const LOGIN_PROFILE_IMAGES: &[&str] = &[
    "/profile1.jpg",
    "/profile2.jpg",
    "/profile3.jpg",
    "/profile4.jpg",
    "/profile5.jpg",
];

pub const LOGIN_BIOS: &[&str] = &[
    "Passionate about AI and machine learning. Building the future, one algorithm at a time.",
    "Full-stack developer with a love for clean code and elegant solutions.",
    "Cybersecurity expert dedicated to protecting digital assets and ensuring online safety.",
    "Data scientist uncovering insights from complex datasets to drive informed decision-making.",
    "Cloud computing enthusiast helping businesses scale and innovate in the digital age.",
];

pub const LOGIN_INTERESTS: &[&[&str]] = &[
    &["Artificial Intelligence", "Machine Learning", "Data Science"],
    &["Web Development", "JavaScript", "React", "Node.js"],
    &["Cybersecurity", "Network Security", "Ethical Hacking"],
    &["Data Analysis", "Big Data", "Statistical Modeling"],
    &["Cloud Computing", "DevOps", "Microservices"],
];

pub const COMMENTERS: &[&str] = &[
    "VR Enthusiast",
    "AR Developer",
    "XR Researcher",
    "Tech Educator",
    "Metaverse Explorer",
    "Spatial Computing Expert",
    "Haptic Engineer",
    "Neural Interface Scientist",
    "Digital Twin Specialist",
    "Immersive UX Designer",
    "WebXR Developer",
    "Volumetric Capture Artist",
    "Edge AI Researcher",
    "Blockchain in XR Advocate",
    "IoT & AR Integrator",
    "XR Ethics Philosopher",
    "Quantum Computing Researcher",
    "5G & XR Network Specialist",
    "Holographic Display Engineer",
    "Wearable Tech Designer",
];

pub const COMMENTER_EMAILS: &[&str] = &[
    "vr.enthusiast@techmail.com",
    "ar.developer@immersive.io",
    "xr.researcher@university.edu",
    "educator@tech-learning.org",
    "explorer@metaverse.world",
    "spatial.expert@computing.tech",
    "haptic.engineer@touch.tech",
    "neural@interface-lab.science",
    "digital.twin@simulation.tech",
    "ux@immersive-design.studio",
    "webxr@developer.io",
    "volumetric@capture-studio.art",
    "edge.ai@research.org",
    "blockchain@xr-future.tech",
    "iot.ar@integration.solutions",
    "ethics@xr-philosophy.edu",
    "quantum@computing-vr.research",
    "5g.specialist@network-xr.tech",
    "holographic@display.engineering",
    "wearable@tech-design.studio",
];

pub const TOPIC_COMMENTS: &[(&str, &[&str])] = &[
    (
        "Virtual Reality",
        &[
            "The immersive learning potential of VR is incredible. I've been using VR classrooms with my students and have seen significant improvements in engagement and retention, especially for complex spatial concepts.",
            "Have you tried the latest Varjo headset? The resolution is getting close to retinal display quality, which is a game-changer for educational applications where detail matters.",
            "I'm curious about the long-term effects of extended VR use in educational settings. Are there studies on the optimal duration for VR learning sessions before cognitive fatigue sets in?",
            "The social presence aspect of VR learning environments is what makes them so powerful. Being able to 'be there' with other learners creates a sense of community that's hard to replicate in other distance learning formats.",
            "Accessibility remains a challenge. How are you addressing the needs of students with various disabilities in VR learning environments?",
        ],
    ),
    (
        "Augmented Reality",
        &[
            "The retail applications for AR are just the beginning. I've been working on AR for manufacturing, and the efficiency gains from having assembly instructions overlaid directly on the workspace are substantial.",
            "Apple's entrance into the AR glasses market is going to accelerate adoption dramatically. Their focus on design and user experience will help overcome the social barriers that have held back widespread AR use.",
            "Location-based AR is where I see the most immediate practical value. Being able to navigate unfamiliar environments with contextual information overlaid on your view is transformative for travel and exploration.",
            "The challenge with AR in retail is creating experiences that add genuine value rather than just novelty. Virtual try-on needs to be accurate enough to build trust that the physical product will match the AR preview.",
            "Privacy concerns with AR are significant and often overlooked. Constant environmental scanning means these devices are potentially collecting vast amounts of data about private spaces.",
        ],
    ),
    (
        "Mixed Reality",
        &[
            "The distinction between AR and MR is crucial - true mixed reality with occlusion and physical interaction is much more complex but also more powerful for applications where precise spatial relationships matter.",
            "I've been testing the latest HoloLens in architectural visualization, and the ability to walk through a virtual building placed in a real space with colleagues is revolutionizing our design review process.",
            "The computational requirements for good MR are still a limiting factor for widespread adoption. Real-time environment mapping and physics simulation require significant processing power.",
            "Mixed reality remote collaboration tools are showing promising results in our industrial maintenance workflows. Having an expert 'see what you see' and annotate your physical environment in real-time reduces downtime significantly.",
            "The hand tracking in the latest MR headsets is impressive, but we still need better haptic feedback solutions to make interactions feel natural and intuitive.",
        ],
    ),
    (
        "AI in VR",
        &[
            "The integration of AI with neural interfaces is where I see the most exciting potential. Adaptive systems that can interpret intention rather than just explicit commands would be transformative.",
            "We're using machine learning to analyze brain activity patterns during VR experiences, and the potential for creating truly responsive environments that adapt to emotional states is fascinating.",
            "The ethical implications of direct neural interfaces need more attention. Who owns the neural data? How do we ensure users maintain cognitive autonomy when systems can potentially influence neural activity?",
            "The accessibility benefits of neural interfaces for people with physical disabilities could be life-changing. Enabling full participation in virtual environments through thought alone would be incredibly empowering.",
            "The resolution and signal-to-noise ratio of non-invasive BCI technology is improving rapidly, but we're still years away from the precision needed for fine control in consumer applications.",
        ],
    ),
    (
        "Metaverse",
        &[
            "The economic models being developed for metaverse platforms are fascinating. I'm particularly interested in how decentralized governance can create more equitable digital economies than what we've seen in traditional platforms.",
            "Interoperability between different metaverse platforms is the key challenge that needs to be solved. Without the ability to move assets and identity between virtual worlds, we'll end up with isolated silos rather than a true metaverse.",
            "The environmental impact of metaverse infrastructure is concerning. The computational resources required for realistic, persistent virtual worlds have a significant carbon footprint that needs to be addressed.",
            "Social norms and governance in virtual spaces are evolving rapidly. The communities that are establishing effective self-governance models now will likely influence the cultural development of the broader metaverse.",
            "The potential for the metaverse to increase social isolation is real, but so is its potential to create meaningful connection for people with physical or geographical limitations. The outcome depends entirely on how we design these spaces.",
        ],
    ),
    (
        "AR Gaming",
        &[
            "The most successful AR games are those that enhance rather than replace real-world social interaction. Pokemon GO's community days showed how powerful this can be when done right.",
            "The technical challenges of persistent multiplayer AR are significant. Maintaining consistent positioning of virtual objects across multiple devices in dynamic environments is still an unsolved problem at scale.",
            "Location-based AR gaming has huge potential for tourism and education. Imagine historical sites coming to life with interactive narratives as you explore them physically.",
            "The next generation of AR gaming will leverage 5G and edge computing to create shared experiences with much higher fidelity and lower latency than what's possible today.",
            "Safety concerns with AR gaming need more attention. We need better systems to prevent players from entering dangerous areas or becoming too distracted from their physical surroundings.",
        ],
    ),
    (
        "VR Healthcare",
        &[
            "The results we're seeing with VR exposure therapy for PTSD and phobias are remarkable. Being able to carefully control the intensity of triggering stimuli provides a level of gradual exposure that's difficult to achieve in traditional therapy.",
            "Pain management is another area where VR is showing significant promise. The immersive distraction can reduce perceived pain levels during procedures and potentially reduce the need for pharmacological interventions.",
            "Medical training in VR allows for unlimited repetition of rare or high-risk scenarios without any risk to patients. The ability to make and learn from mistakes in a safe environment is invaluable for developing clinical skills.",
            "The data collection potential of VR therapy sessions could advance our understanding of psychological conditions, but it also raises important privacy considerations that need to be carefully addressed.",
            "Accessibility of VR therapy solutions remains a challenge. For widespread adoption in healthcare systems, we need more affordable, easy-to-use solutions that don't require technical expertise to administer.",
        ],
    ),
    (
        "AR in Education",
        &[
            "AR textbooks that bring concepts to life are showing promising results in our pilot programs. Students can visualize complex systems in 3D and interact with them in ways that deepen understanding.",
            "The ability to overlay information on real objects for just-in-time learning is particularly valuable for practical skills training. We're using it for everything from laboratory procedures to automotive repair.",
            "Creating good AR educational content requires close collaboration between subject matter experts and AR developers. The technical possibilities need to be guided by sound pedagogical principles.",
            "Classroom management with AR devices presents new challenges for teachers. Developing effective protocols for when and how to use these tools is essential for their successful integration.",
            "The data collected through educational AR applications could provide unprecedented insights into learning processes, but we need to be thoughtful about student privacy and the potential for algorithmic bias in adaptive systems.",
        ],
    ),
    (
        "Haptic Feedback",
        &[
            "The haptic gloves described in this article are impressive, but we're also seeing promising advances in ultrasonic haptics that can create tactile sensations without requiring users to wear anything.",
            "Thermal feedback is an often overlooked aspect of haptic technology. Being able to simulate temperature changes adds another dimension to virtual touch that's crucial for certain applications.",
            "The precision of force feedback in current consumer haptic devices is still limited. We need higher resolution and lower latency systems to create truly convincing interactions with virtual objects.",
            "Standardization of haptic effects across platforms would accelerate development. Currently, developers have to create custom implementations for each haptic system, which limits content availability.",
            "The potential for haptic technology in remote physical work is enormous. Telerobotic systems with high-fidelity haptic feedback could transform fields from surgery to hazardous environment operations.",
        ],
    ),
    (
        "Spatial Computing",
        &[
            "The integration of LIDAR sensors in consumer devices is democratizing spatial computing. Applications can now create detailed 3D maps of environments without specialized hardware.",
            "Persistent spatial anchors that maintain their position across sessions and devices are the foundation for a shared AR layer over the physical world. The technical challenges of maintaining these anchors at scale are significant but solvable.",
            "Privacy considerations in spatial computing are complex. These systems necessarily create detailed maps of environments that may include private spaces, raising questions about data ownership and access.",
            "The potential for spatial computing in accessibility is significant. Systems that understand the 3D structure of environments could provide unprecedented navigational assistance for people with visual impairments.",
            "Edge computing is essential for responsive spatial applications. Processing sensor data and rendering complex 3D content locally reduces latency and bandwidth requirements.",
        ],
    ),
    (
        "Neural Interfaces",
        &[
            "The non-invasive neural interfaces described here are making impressive progress, but the signal quality still doesn't compare to implanted electrodes. The question is whether consumer applications can be compelling enough with the lower resolution data.",
            "Ethical frameworks for neural interface technology need to be developed proactively, not reactively. Once these systems are widespread, it will be much harder to implement safeguards.",
            "The potential for neural interfaces to assist people with communication disabilities is one of the most promising near-term applications. Even with current technology, basic communication is possible for people who cannot speak or type.",
            "Standardized protocols for neural data would accelerate research and application development. Currently, each system uses proprietary formats, making it difficult to compare results or build on others' work.",
            "The distinction between reading and writing neural activity is crucial from both a technical and ethical perspective. Systems that only read neural signals raise fewer concerns than those that can potentially influence brain activity.",
        ],
    ),
    (
        "Holographic Displays",
        &[
            "The light field displays mentioned in the article are promising, but true volumetric displays that create points of light in actual 3D space offer advantages for certain applications, particularly those requiring multiple simultaneous viewers.",
            "The computational requirements for real-time holographic rendering are immense. Specialized hardware acceleration will be essential for practical applications beyond pre-rendered content.",
            "Medical visualization is one of the most compelling use cases for holographic displays. Being able to see and manipulate 3D medical imaging data in space provides insights that are difficult to achieve with 2D screens.",
            "The integration of eye tracking with holographic displays allows for dynamic focus cues that can reduce the vergence-accommodation conflict that causes discomfort in traditional stereoscopic displays.",
            "Miniaturization of holographic display technology for mobile devices presents significant technical challenges, but would enable new categories of AR applications that don't require headsets.",
        ],
    ),
    (
        "5G and XR",
        &[
            "The low latency of 5G is more important than the bandwidth for many XR applications. Being able to offload complex rendering to edge servers only works if the round-trip time is imperceptible.",
            "Mobile edge computing (MEC) combined with 5G creates new possibilities for lightweight XR devices that can access powerful computing resources as needed without being tethered to a local PC.",
            "The deployment of 5G infrastructure is uneven, which creates challenges for developing XR applications that rely on its capabilities. Graceful degradation for areas with less robust connectivity is essential.",
            "Private 5G networks for industrial applications are where we're seeing some of the most interesting XR use cases. The controlled environment allows for optimization of the network specifically for XR requirements.",
            "The power consumption of 5G modems is still a limiting factor for all-day wearable XR devices. Advances in energy-efficient communication technology are as important as improvements in display and processing efficiency.",
        ],
    ),
    (
        "Digital Twins",
        &[
            "The real-time synchronization between physical systems and their digital twins is where the true value lies. The ability to simulate changes before implementing them physically reduces risk and cost significantly.",
            "Standardization of digital twin interfaces would accelerate adoption across industries. Currently, each vendor's solution uses proprietary formats, making integration across systems challenging.",
            "The level of detail required in a digital twin depends entirely on its purpose. For some applications, a simplified model is sufficient, while others require sub-millimeter accuracy and real-time physics simulation.",
            "The potential for digital twins in urban planning is enormous. Being able to simulate the impact of proposed changes on traffic flow, energy usage, and quality of life before breaking ground could transform how cities evolve.",
            "Security considerations for digital twins are often overlooked. These systems can provide detailed insights into critical infrastructure, making them potential targets for cyber attacks.",
        ],
    ),
    (
        "Quantum Computing",
        &[
            "The potential for quantum computing to accelerate physics simulations for VR is enormous, but practical quantum advantage for these applications is still years away. Current quantum systems are too noisy and limited in qubit count.",
            "Quantum machine learning algorithms could transform how we generate content for virtual environments, potentially creating more realistic and diverse procedural worlds than classical algorithms can achieve.",
            "The security implications of quantum computing for VR/AR platforms need more attention. Many current encryption methods used to secure virtual assets and communications will be vulnerable to quantum attacks.",
            "Hybrid classical-quantum approaches are likely to be the most practical path forward in the near term. Using quantum processors for specific computations where they excel, while relying on classical systems for everything else.",
            "The cooling and stability requirements of current quantum systems make them impractical for consumer applications. Advances in room-temperature quantum computing would be transformative for integration with XR technology.",
        ],
    ),
    (
        "Edge AI",
        &[
            "On-device AI for AR object recognition has made tremendous progress, but handling edge cases and unusual lighting conditions remains challenging. Hybrid approaches that can fall back to cloud processing when needed offer the best user experience.",
            "The privacy benefits of edge AI for AR are significant. Processing sensitive data locally means that personal information doesn't need to leave the device, addressing many user concerns about constant environmental scanning.",
            "Model compression techniques are essential for deploying sophisticated AI on mobile AR devices. Quantization and pruning can reduce model size and computational requirements without significant performance degradation.",
            "Continuous learning on edge devices could allow AR systems to adapt to individual users and environments over time, but raises questions about data ownership and algorithmic transparency.",
            "The energy efficiency of AI processing is a critical factor for wearable AR devices. Specialized neural processing units that can perform inference with minimal power consumption are enabling new categories of all-day wearables.",
        ],
    ),
    (
        "Blockchain",
        &[
            "The potential for blockchain to enable true ownership of virtual assets across platforms is compelling, but the technical challenges of interoperability between different virtual worlds are significant.",
            "Smart contracts could automate licensing and royalties for creator-generated content in virtual environments, potentially enabling more sustainable economic models for digital creators.",
            "The environmental impact of proof-of-work blockchains is incompatible with sustainable metaverse development. Proof-of-stake and other more efficient consensus mechanisms are essential for widespread adoption.",
            "Decentralized identity systems based on blockchain could provide persistent identity across virtual platforms while giving users control over their personal data and digital presence.",
            "The current user experience of blockchain interactions is too complex for mainstream adoption in virtual worlds. Simplified interfaces that hide the underlying complexity while maintaining security are needed.",
        ],
    ),
    (
        "IoT",
        &[
            "The integration of IoT devices with AR creates a powerful combination where digital information and control interfaces can be contextually overlaid on physical objects. This is particularly valuable in industrial and smart home environments.",
            "Security and privacy concerns are amplified when IoT and AR are combined. These systems necessarily collect detailed information about both the environment and user behavior, requiring robust safeguards.",
            "Standardized protocols for IoT-AR interaction would accelerate development. Currently, each combination of AR platform and IoT ecosystem requires custom integration, limiting scalability.",
            "Edge computing is essential for responsive IoT-AR applications. Processing sensor data and rendering AR content locally reduces latency and bandwidth requirements, especially important for industrial applications.",
            "The potential for IoT-AR in accessibility is significant. Systems that understand both the environment and user context could provide unprecedented assistance for people with various disabilities.",
        ],
    ),
    (
        "Robotics",
        &[
            "Teleoperation of robots through VR interfaces provides an intuitive control method that leverages human spatial reasoning abilities. This is particularly valuable for complex manipulation tasks in unstructured environments.",
            "The haptic feedback loop between robots and VR controllers is essential for precise manipulation. Without tactile information, operators struggle to apply appropriate force and make fine adjustments.",
            "Training robots through demonstration in VR environments is showing promise as a more intuitive alternative to traditional programming. Operators can simply show the robot what to do in a virtual environment.",
            "The latency requirements for effective VR-robot teleoperation are stringent. Even small delays between action and feedback can make precise control difficult and lead to operator discomfort.",
            "Shared autonomy approaches, where the robot handles low-level control while the human provides high-level guidance through VR, offer the best balance of precision and operator cognitive load for complex tasks.",
        ],
    ),
    (
        "Wearable Tech",
        &[
            "The form factor of AR glasses remains the biggest challenge for mainstream adoption. Until we can achieve the functionality of current headsets in a device that looks like normal eyewear, social acceptance will be limited.",
            "Battery technology is the limiting factor for all-day wearable AR. Advances in energy density and power efficiency are as important as improvements in display and processing technology.",
            "The potential for AR wearables to provide subtle, contextual information throughout the day could transform how we interact with both digital information and our physical environment.",
            "Privacy considerations for always-on wearables need more attention. These devices necessarily collect significant data about both the user and their surroundings, raising questions about consent and data security.",
            "The integration of AR capabilities into existing wearable categories like smartwatches and hearables offers a path to more gradual adoption than standalone AR glasses.",
        ],
    ),
];

pub const GENERAL_COMMENTS: &[&str] = &[
    "This is a fascinating development in the tech space. I'm curious to see how it evolves over the next few years.",
    "The potential applications of this technology are enormous. I can see this being used in everything from entertainment to healthcare.",
    "I've been following this technology for a while, and the recent advancements are impressive. The future looks promising!",
    "While the technology is impressive, I think there are still significant challenges to overcome before widespread adoption.",
    "The ethical implications of this technology need more discussion. We should be proactive about establishing guidelines for responsible use.",
];

/// Per-topic comment set, if the topic has one.
pub fn topic_comments(topic: &str) -> Option<&'static [&'static str]> {
    TOPIC_COMMENTS
        .iter()
        .find(|(name, _)| *name == topic)
        .map(|(_, comments)| *comments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_topic_has_a_comment_set() {
        for topic in TOPICS {
            let comments = topic_comments(topic).unwrap_or_else(|| panic!("no comments for {topic}"));
            assert_eq!(comments.len(), 5);
        }
    }

    #[test]
    fn unknown_topic_has_no_comment_set() {
        assert!(topic_comments("Cooking").is_none());
    }

    #[test]
    fn tables_are_non_empty() {
        assert!(!POST_TITLES.is_empty());
        assert!(!POST_BODIES.is_empty());
        assert!(!POST_IMAGES.is_empty());
        assert!(!PROFILE_IMAGES.is_empty());
        assert!(!USER_BIOS.is_empty());
        assert!(!INTERESTS.is_empty());
        assert_eq!(LOGIN_PROFILE_IMAGES.len(), LOGIN_BIOS.len());
        assert_eq!(LOGIN_BIOS.len(), LOGIN_INTERESTS.len());
        assert!(!COMMENTERS.is_empty());
        assert_eq!(COMMENTERS.len(), COMMENTER_EMAILS.len());
        assert_eq!(GENERAL_COMMENTS.len(), 5);
    }
}
